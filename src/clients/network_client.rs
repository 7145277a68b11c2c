//! # Network Client
//!
//! 생성 후 연결하고 종료 전에 연결을 끊어야 하는 자원을 흉내 낸 클라이언트입니다.
//! 생성자에서는 연결하지 않습니다. 연결은 의존성 주입이 끝난 뒤
//! [`Initializable::initialize`]에서, 해제는 컨테이너 종료 시
//! [`Disposable::destroy`]에서 일어납니다.
//!
//! ```text
//! new(url) ──▶ initialize(): connect + call("초기화 연결 메시지")
//!          ──▶ call(message) ...
//!          ──▶ destroy(): disconnect
//! ```
//!
//! 실제 소켓은 열지 않으며, 주고받은 메시지는 [`NetworkClient::transcript`]에 기록됩니다.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use log::info;
use thiserror::Error;

use crate::core::errors::BoxError;
use crate::core::lifecycle::{Disposable, Initializable};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Not connected to {0}")]
    NotConnected(String),

    #[error("Already connected to {0}")]
    AlreadyConnected(String),
}

pub struct NetworkClient {
    url: String,
    connected: AtomicBool,
    transcript: Mutex<Vec<String>>,
}

impl NetworkClient {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        info!("생성자 호출, url = {}", url);
        Self {
            url,
            connected: AtomicBool::new(false),
            transcript: Mutex::new(Vec::new()),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    pub fn connect(&self) -> Result<(), NetworkError> {
        if self.connected.swap(true, Ordering::SeqCst) {
            return Err(NetworkError::AlreadyConnected(self.url.clone()));
        }
        self.record(format!("connect: {}", self.url));
        Ok(())
    }

    pub fn call(&self, message: &str) -> Result<(), NetworkError> {
        if !self.is_connected() {
            return Err(NetworkError::NotConnected(self.url.clone()));
        }
        self.record(format!("call: {} message = {}", self.url, message));
        Ok(())
    }

    pub fn disconnect(&self) -> Result<(), NetworkError> {
        if !self.connected.swap(false, Ordering::SeqCst) {
            return Err(NetworkError::NotConnected(self.url.clone()));
        }
        self.record(format!("close: {}", self.url));
        Ok(())
    }

    /// 지금까지 기록된 연결/호출/해제 로그
    pub fn transcript(&self) -> Vec<String> {
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, line: String) {
        info!("{}", line);
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }
}

impl Initializable for NetworkClient {
    fn initialize(&self) -> Result<(), BoxError> {
        self.connect()?;
        self.call("초기화 연결 메시지")?;
        Ok(())
    }
}

impl Disposable for NetworkClient {
    fn destroy(&self) -> Result<(), BoxError> {
        self.disconnect()?;
        Ok(())
    }
}
