//! Member Entity
//!
//! 회원 엔티티와 등급을 정의합니다.

use serde::{Deserialize, Serialize};

/// 회원 등급
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    Basic,
    Vip,
}

/// 회원 엔티티
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub grade: Grade,
}

impl Member {
    pub fn new(id: u64, name: impl Into<String>, grade: Grade) -> Self {
        Self {
            id,
            name: name.into(),
            grade,
        }
    }

    pub fn is_vip(&self) -> bool {
        self.grade == Grade::Vip
    }
}
