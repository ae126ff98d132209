//! Portal (site identity) entities

/// Contact and branding record of the site.
#[derive(Debug, Clone, PartialEq)]
pub struct Portal {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub email: String,
    pub mobile_phone: String,
    pub theme_color: Option<String>,
    pub is_active: bool,
}

/// Social network link of a portal.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialMediaAccount {
    pub name: String,
    pub url: String,
}

/// The active portal with its social links, handed to every page.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalContact {
    pub portal: Portal,
    pub social_media_accounts: Vec<SocialMediaAccount>,
}
