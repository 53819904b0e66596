//! This module contains basic base64 functionality as used in Hawk.

use base64::engine::general_purpose::{GeneralPurpose, STANDARD};

/// STANDARD_ENGINE encodes with the standard alphabet and includes padding.
pub(crate) const STANDARD_ENGINE: GeneralPurpose = STANDARD;
