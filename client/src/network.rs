//! Client session loop: one request datagram out, one response datagram in

use crate::menu::{self, MenuInput};
use crate::validation;
use log::{error, info};
use shared::{
    PasswordRequest, PasswordResponse, DEFAULT_PORT, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
    RESPONSE_SIZE,
};
use std::io::Write;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UdpSocket;

pub struct Client {
    socket: UdpSocket,
    server_addr: SocketAddr,
    /// Receive timeout in seconds; 0 waits forever (the reference behavior
    /// of this protocol, which has no timeout at all).
    timeout_secs: u64,
}

impl Client {
    /// Resolves the server address once and binds an ephemeral local socket.
    pub async fn new(server: &str, timeout_secs: u64) -> Result<Self, Box<dyn std::error::Error>> {
        let server_addr = resolve_server_addr(server).await?;
        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        info!("Sending requests to {}", server_addr);

        Ok(Client {
            socket,
            server_addr,
            timeout_secs,
        })
    }

    /// Runs the interactive request loop until the user quits or a
    /// transport error occurs.
    ///
    /// Validation failures are recovered locally with a reprompt and never
    /// reach the wire; any send or receive failure aborts the session.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("{}", menu::password_menu());
            std::io::stdout().flush()?;

            let line = match lines.next_line().await? {
                Some(line) => line,
                // stdin closed: treat like a quit
                None => return Ok(()),
            };

            let (type_code, length) = match menu::parse_input(&line) {
                MenuInput::Help => {
                    println!("{}", menu::help_menu());
                    continue;
                }
                MenuInput::Invalid => {
                    println!("Invalid input. Please enter a valid type and length.\n");
                    continue;
                }
                MenuInput::Request { type_code, length } => (type_code, length),
            };

            if !validation::validate_type(menu::ALLOWED_TYPES, type_code) {
                println!("Bad request: the type inserted is not valid.\n");
                continue;
            }

            if !validation::validate_length(&length, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH) {
                println!("Bad request: the length for the password is not valid.\n");
                continue;
            }

            if !validation::should_continue(type_code, menu::QUIT_CODE) {
                info!("Quit requested, closing session");
                return Ok(());
            }

            match self.request_password(type_code, &length).await {
                Ok(password) => println!("Password generated: {}\n", password),
                Err(e) => {
                    error!("Exchange failed: {}", e);
                    return Err(e);
                }
            }
        }
    }

    /// Performs one request/response exchange for an already validated
    /// type and length.
    pub async fn request_password(
        &self,
        type_code: char,
        length: &str,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let request = PasswordRequest::new(type_code, length);
        self.socket
            .send_to(&request.encode()?, self.server_addr)
            .await?;

        // One spare byte so an oversized datagram shows up as a wrong-size
        // decode error instead of being silently truncated by the OS.
        let mut buffer = [0u8; RESPONSE_SIZE + 1];
        let (len, _) = if self.timeout_secs > 0 {
            tokio::time::timeout(
                Duration::from_secs(self.timeout_secs),
                self.socket.recv_from(&mut buffer),
            )
            .await
            .map_err(|_| format!("timed out waiting for response after {}s", self.timeout_secs))??
        } else {
            self.socket.recv_from(&mut buffer).await?
        };

        let response = PasswordResponse::decode(&buffer[..len])?;
        Ok(response.password)
    }
}

/// Resolves `host` or `host:port` to the first address name resolution
/// returns. A bare host gets the protocol's default port.
pub async fn resolve_server_addr(server: &str) -> Result<SocketAddr, Box<dyn std::error::Error>> {
    let target = if server.contains(':') {
        server.to_string()
    } else {
        format!("{}:{}", server, DEFAULT_PORT)
    };

    let mut addresses = tokio::net::lookup_host(target.as_str()).await?;
    match addresses.next() {
        Some(addr) => Ok(addr),
        None => Err(format!("no addresses found for {}", target).into()),
    }
}
