// ABOUTME: Wire protocol for the live posture WebSocket
// ABOUTME: Decodes landmark and image messages into frame payloads and encodes feedback replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Live Posture Protocol
//!
//! Inbound text messages are JSON objects tagged by `type`:
//!
//! ```json
//! {"type": "landmarks", "landmarks": [{"name": "LEFT_SHOULDER", "x": 0.4, "y": 0.3, "z": 0.0, "visibility": 0.98}]}
//! {"type": "image", "data": "data:image/jpeg;base64,/9j/4AAQ..."}
//! ```
//!
//! Text that is not JSON at all is taken to be a base64 encoded image, and
//! binary messages are raw image bytes. Every processed frame is answered
//! with exactly one `{"feedback": "..."}` object.

use crate::pose::{FramePayload, LandmarkPayload};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Tagged inbound JSON message
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundMessage {
    /// Client-side extracted keypoints; `null` or `[]` means nobody in view
    Landmarks {
        /// Keypoints for this frame
        #[serde(default)]
        landmarks: Option<Vec<LandmarkPayload>>,
    },
    /// Encoded camera frame
    Image {
        /// Base64 or `data:` URL
        data: String,
    },
}

/// Messages the server cannot turn into a frame
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// JSON that does not match any inbound message shape
    #[error("invalid message: {0}")]
    InvalidMessage(#[from] serde_json::Error),
    /// Image data that is not valid base64
    #[error("invalid base64 image data: {0}")]
    InvalidImage(#[from] base64::DecodeError),
}

/// Per-frame reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackMessage {
    /// Cue to show or speak to the user
    pub feedback: String,
}

impl FeedbackMessage {
    /// Wrap a cue
    #[must_use]
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }

    /// Serialize for a WebSocket text frame
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl TryFrom<InboundMessage> for FramePayload {
    type Error = ProtocolError;

    fn try_from(message: InboundMessage) -> Result<Self, Self::Error> {
        match message {
            InboundMessage::Landmarks { landmarks } => Ok(Self::Landmarks(landmarks)),
            InboundMessage::Image { data } => decode_image(&data).map(Self::Image),
        }
    }
}

/// Decode a WebSocket text message
///
/// # Errors
///
/// Returns a `ProtocolError` when the JSON shape is wrong or the image data
/// is not base64
pub fn decode_text(text: &str) -> Result<FramePayload, ProtocolError> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => serde_json::from_value::<InboundMessage>(value)?.try_into(),
        Err(_) => decode_image(text).map(FramePayload::Image),
    }
}

/// Decode a WebSocket binary message
#[must_use]
pub fn decode_binary(bytes: Vec<u8>) -> FramePayload {
    FramePayload::Image(bytes)
}

/// Decode base64 image data, stripping any `data:<mime>;base64,` prefix
///
/// # Errors
///
/// Returns `ProtocolError::InvalidImage` if the body is not valid base64
pub fn decode_image(data: &str) -> Result<Vec<u8>, ProtocolError> {
    let body = data
        .split_once(',')
        .map_or(data, |(_, encoded)| encoded)
        .trim();
    Ok(STANDARD.decode(body)?)
}
