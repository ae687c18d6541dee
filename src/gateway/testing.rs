// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{HttpRequest, Transport, TransportResponse};
use crate::error::{BitsyError, BitsyResult};

/// Replays queued replies in order and records every request it receives.
/// An exhausted queue answers with a transport failure.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<BitsyResult<TransportResponse>>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Ok(TransportResponse::new(status, body)));
        self
    }

    pub fn reply_json(self, body: Value) -> Self {
        self.reply(200, body.to_string())
    }

    pub fn fail(self, message: &str) -> Self {
        self.push(Err(BitsyError::Transport(message.to_string())));
        self
    }

    fn push(&self, reply: BitsyResult<TransportResponse>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn seen(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &HttpRequest) -> BitsyResult<TransportResponse> {
        self.seen.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BitsyError::Transport("no scripted reply".to_string())))
    }
}
