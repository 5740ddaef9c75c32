// sender identity on applicant-facing mail
pub const ORGANIZATION_NAME: &str = "Henry-Tech Network Solutions";
pub const ORGANIZATION_TAGLINE: &str = "La fiabilité au cœur du réseau";

// support line given to applicants
pub const SUPPORT_WHATSAPP: &str = "+243 970 710 710";

pub const DEFAULT_OPERATOR_EMAIL: &str = "henrkabeya26@gmail.com";

// subjects
pub const ADMIN_SUBJECT_PREFIX: &str = "Nouvelle inscription";
pub const APPLICANT_SUBJECT: &str = "Confirmation de votre inscription - Henry-Tech";

// palette shared by both templates
pub const BRAND_COLOR: &str = "#1e3a8a";
pub const ACCENT_COLOR: &str = "#3b82f6";
