//! Authorization policy and authentication scheme names.

/// Authentication scheme names.
#[derive(Debug)]
pub struct AuthenticationSchemes;

impl AuthenticationSchemes {
    /// Browser session cookie.
    pub const COOKIE: &'static str = "Identity.Application";
    /// `Authorization: token <key>` API keys.
    pub const GREENFIELD_API_KEY: &'static str = "Greenfield.APIKeys";
}

/// Authorization policy names. Each is also the permission a key must be granted.
#[derive(Debug)]
pub struct Policies;

impl Policies {
    /// View the profile of the authenticated user.
    pub const CAN_VIEW_PROFILE: &'static str = "btcpay.user.canviewprofile";
    /// View invoices of a store.
    pub const CAN_VIEW_INVOICES: &'static str = "btcpay.store.canviewinvoices";
    /// Create invoices in a store.
    pub const CAN_CREATE_INVOICE: &'static str = "btcpay.store.cancreateinvoice";
}
