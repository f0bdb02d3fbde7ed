//! Generated editorial content.

use serde::{Deserialize, Serialize};

/// Request body for blog-post generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogGenerationRequest {
  pub strain_id: i64,
}

/// An AI-generated blog post tied to a strain record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
  pub id:        i64,
  pub strain_id: i64,
  pub title:     String,
  pub content:   String,
  pub tags:      Vec<String>,
}
