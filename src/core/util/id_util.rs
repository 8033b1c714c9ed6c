use uuid::Uuid;

/// Globally unique identifier: a v4 UUID rendered as 32 lowercase hex characters.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
