//! Admin entry gate.
//!
//! A convenience check for the hidden admin tools, not an access control.

/// Address accepted when none is configured
pub const DEFAULT_ADMIN_EMAIL: &str = "xlathon@gmail.com";

/// Whether `email` matches the configured admin address, ignoring case
pub fn is_admin_email(email: &str, admin_email: &str) -> bool {
    email.trim().eq_ignore_ascii_case(admin_email.trim())
}
