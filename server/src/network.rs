//! Server network layer handling the UDP receive/respond loop

use crate::generator;
use log::{debug, info};
use shared::{
    PasswordRequest, PasswordResponse, PasswordType, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
    REQUEST_SIZE,
};
use tokio::net::UdpSocket;

/// The password generation server: one socket, one request in flight.
pub struct Server {
    socket: UdpSocket,
}

impl Server {
    /// Binds the server socket to `addr`.
    pub async fn bind(addr: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let socket = UdpSocket::bind(addr).await?;
        info!("Server listening on {}", socket.local_addr()?);
        Ok(Server { socket })
    }

    /// Runs the receive/respond loop until a transport error occurs.
    ///
    /// Each iteration handles exactly one exchange: receive one request
    /// datagram, generate the password, send one response datagram back to
    /// the originating address. A receive failure, a malformed datagram or
    /// a send failure aborts the loop; there is no retry at any layer.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        // One spare byte so an oversized datagram shows up as a wrong-size
        // decode error instead of being silently truncated by the OS.
        let mut buffer = [0u8; REQUEST_SIZE + 1];

        loop {
            let (len, addr) = self.socket.recv_from(&mut buffer).await?;
            let request = PasswordRequest::decode(&buffer[..len])?;

            info!("New connection from {}:{}", addr.ip(), addr.port());

            let response = handle_request(&request);
            self.socket.send_to(&response.encode()?, addr).await?;
        }
    }

    /// Local address of the bound socket, for tests and logs.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.socket.local_addr()
    }
}

/// Turns a decoded request into a response record.
///
/// Unrecognized type codes fall back to numeric generation instead of being
/// rejected; clients validate the code before sending, so this path only
/// answers foreign clients.
pub fn handle_request(request: &PasswordRequest) -> PasswordResponse {
    if !"namsu".contains(request.type_code.to_ascii_lowercase()) {
        debug!(
            "Unrecognized type code {:?}, defaulting to numeric",
            request.type_code
        );
    }
    let kind = PasswordType::from_code(request.type_code);
    let length = clamp_length(&request.length);
    PasswordResponse::new(&generator::generate(kind, length))
}

/// Re-validates the decoded length field before it reaches the generator.
///
/// The client already validates lengths, but the fixed-capacity response
/// field must hold for any datagram that arrives, so out-of-range values
/// are clamped to the nearest protocol bound. An unparsable field reads as
/// zero and clamps to the minimum.
fn clamp_length(raw: &str) -> usize {
    let value = raw.parse::<u32>().unwrap_or(0);
    value.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_request_generates_requested_length() {
        let response = handle_request(&PasswordRequest::new('s', "16"));
        assert_eq!(response.password.len(), 16);
        for c in response.password.bytes() {
            assert!(PasswordType::Secure.charset().contains(&c));
        }
    }

    #[test]
    fn test_handle_request_unrecognized_code_is_numeric() {
        let response = handle_request(&PasswordRequest::new('x', "8"));
        assert_eq!(response.password.len(), 8);
        assert!(response.password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_handle_request_maximum_length_fits_the_response_field() {
        let response = handle_request(&PasswordRequest::new('u', "32"));
        assert_eq!(response.password.len(), 32);
        assert!(response.encode().is_ok());
    }

    #[test]
    fn test_clamp_length_accepts_in_range_values() {
        assert_eq!(clamp_length("6"), 6);
        assert_eq!(clamp_length("32"), 32);
        assert_eq!(clamp_length("17"), 17);
    }

    #[test]
    fn test_clamp_length_clamps_out_of_range_values() {
        assert_eq!(clamp_length("5"), MIN_PASSWORD_LENGTH as usize);
        assert_eq!(clamp_length("33"), MAX_PASSWORD_LENGTH as usize);
        assert_eq!(clamp_length("100000"), MAX_PASSWORD_LENGTH as usize);
    }

    #[test]
    fn test_clamp_length_treats_garbage_as_minimum() {
        assert_eq!(clamp_length(""), MIN_PASSWORD_LENGTH as usize);
        assert_eq!(clamp_length("abc"), MIN_PASSWORD_LENGTH as usize);
        assert_eq!(clamp_length("-4"), MIN_PASSWORD_LENGTH as usize);
    }
}
