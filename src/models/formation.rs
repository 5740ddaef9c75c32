/// Represents the training courses offered on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formation {
    /// CCTV and surveillance system installation
    VideoSurveillance,
    /// Small business network design
    Networks,
    /// Computer maintenance
    Maintenance,
    /// Operating system installation and software updates
    OperatingSystems,
    /// Cisco CCNA preparation
    Ccna,
    /// Office suite training
    OfficeSuite,
}

/// Implementation for Formation
impl Formation {
    pub const ALL: [Formation; 6] = [
        Formation::VideoSurveillance,
        Formation::Networks,
        Formation::Maintenance,
        Formation::OperatingSystems,
        Formation::Ccna,
        Formation::OfficeSuite,
    ];

    /// Gets the code the frontend submits for this formation
    pub fn code(&self) -> &'static str {
        match self {
            Formation::VideoSurveillance => "videosurveillance",
            Formation::Networks => "reseaux",
            Formation::Maintenance => "maintenance",
            Formation::OperatingSystems => "os",
            Formation::Ccna => "ccna",
            Formation::OfficeSuite => "bureautique",
        }
    }

    /// Gets the human readable label shown in emails
    pub fn label(&self) -> &'static str {
        match self {
            Formation::VideoSurveillance => "Installation des systèmes de surveillance",
            Formation::Networks => "Création de réseaux professionnels pour PME",
            Formation::Maintenance => "Maintenance Informatique",
            Formation::OperatingSystems => "Installation OS et mise à jour logiciels",
            Formation::Ccna => "Formation CCNA",
            Formation::OfficeSuite => "Bureautique (Word, Excel, PowerPoint...)",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|formation| formation.code() == code)
    }
}

/// Resolves a submitted code to its label, falling back to the raw code
/// when the catalog does not know it.
pub fn label(code: &str) -> &str {
    Formation::from_code(code).map_or(code, |formation| formation.label())
}
