//! Authorizer Implementations
//!
//! | Authorizer | Policy |
//! |------------|--------|
//! | AllowAllAuthorizer | Permits every request |
//! | AdminListAuthorizer | Admin and read-only user lists |

pub mod admin_list;
pub mod allow_all;

pub use admin_list::AdminListAuthorizer;
pub use allow_all::AllowAllAuthorizer;
