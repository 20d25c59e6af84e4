pub mod request_id;
pub mod security;

pub use request_id::RequestId;
