// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the GoDaddy DNS provider.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Provider Constants
// ============================================================================

/// Name under which the provider is registered in credential files
pub const PROVIDER_NAME: &str = "godaddy";

/// Lowest TTL GoDaddy accepts (10 minutes). Anything lower is raised to this.
pub const MIN_TTL_SECS: u32 = 600;

/// Default GoDaddy production API endpoint
pub const DEFAULT_API_URL: &str = "https://api.godaddy.com";

/// Version prefix of the GoDaddy domains API
pub const API_VERSION_PATH: &str = "v1";

/// Label used for the zone apex in relative record names
pub const APEX_LABEL: &str = "@";

// ============================================================================
// TXT Record Constants
// ============================================================================

/// Maximum length of a single TXT character-string (RFC 1035)
pub const TXT_MAX_STRING_LEN: usize = 255;

/// Separator used when joining TXT parts into one comparable value
pub const TXT_JOIN_SEPARATOR: &str = "";

// ============================================================================
// Configuration Keys
// ============================================================================

/// Credentials setting holding the API key
pub const SETTING_API_KEY: &str = "api_key";

/// Credentials setting holding the API secret
pub const SETTING_API_SECRET: &str = "api_secret";

/// Credentials setting holding an alternate API endpoint
pub const SETTING_API_URL: &str = "api_url";

/// Environment variable for the API key
pub const ENV_API_KEY: &str = "GODADDY_API_KEY";

/// Environment variable for the API secret
pub const ENV_API_SECRET: &str = "GODADDY_API_SECRET";

/// Environment variable for an alternate API endpoint
pub const ENV_API_URL: &str = "GODADDY_API_URL";
