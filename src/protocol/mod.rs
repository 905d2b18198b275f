//! Protocol Module
//!
//! Defines the JSON wire format between clients and the HTTP layer.
//!
//! ## Bodies
//!
//! ### Record
//! ```text
//! {"id": "1", "title": "Shape of You", "artist": "Ed Sheeran", "price": 1.29}
//! ```
//!
//! ### Error
//! ```text
//! {"message": "song not found"}
//! ```
//!
//! ### Status Mapping
//! | error              | status | message                            |
//! |--------------------|--------|------------------------------------|
//! | `EmptyId`          | 400    | id is required                     |
//! | `MalformedPayload` | 400    | invalid request body               |
//! | `NotFound`         | 404    | song not found                     |
//! | `AlreadyExists`    | 409    | song with this id already exists   |
//! | anything else      | 500    | internal server error              |

mod codec;
mod response;

pub use codec::{decode_record, encode_json, MAX_PAYLOAD_SIZE};
pub use response::{message_for, status_for, ErrorBody, Pretty};
