use std::fmt;
use std::str::FromStr;

use crate::model::EntryError;

/// Top-level topic category of the exam outline.
///
/// Variants are declared in outline order, so sorting by `Domain` matches the
/// order the exam guide lists them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    CloudConcepts,
    CloudDataSecurity,
    PlatformInfrastructure,
    ApplicationSecurity,
    SecurityOperations,
    LegalRiskCompliance,
    ReviewPractice,
    Other,
}

impl Domain {
    pub const ALL: [Domain; 8] = [
        Domain::CloudConcepts,
        Domain::CloudDataSecurity,
        Domain::PlatformInfrastructure,
        Domain::ApplicationSecurity,
        Domain::SecurityOperations,
        Domain::LegalRiskCompliance,
        Domain::ReviewPractice,
        Domain::Other,
    ];

    /// Canonical display label, also used as the persisted value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Domain::CloudConcepts => "Domain 1: Cloud Concepts, Architecture, and Design",
            Domain::CloudDataSecurity => "Domain 2: Cloud Data Security",
            Domain::PlatformInfrastructure => {
                "Domain 3: Cloud Platform and Infrastructure Security"
            }
            Domain::ApplicationSecurity => "Domain 4: Cloud Application Security",
            Domain::SecurityOperations => "Domain 5: Cloud Security Operations",
            Domain::LegalRiskCompliance => "Domain 6: Legal, Risk, and Compliance",
            Domain::ReviewPractice => "Review / Practice Exam",
            Domain::Other => "Other",
        }
    }

    /// Exam outline number for the six scored domains.
    #[must_use]
    pub fn outline_number(self) -> Option<u8> {
        match self {
            Domain::CloudConcepts => Some(1),
            Domain::CloudDataSecurity => Some(2),
            Domain::PlatformInfrastructure => Some(3),
            Domain::ApplicationSecurity => Some(4),
            Domain::SecurityOperations => Some(5),
            Domain::LegalRiskCompliance => Some(6),
            Domain::ReviewPractice | Domain::Other => None,
        }
    }

    /// Sub-objectives listed under this domain in the exam outline.
    ///
    /// Empty for the catch-all categories, which accept free-text sub-topics.
    #[must_use]
    pub fn sub_objectives(self) -> &'static [&'static str] {
        match self {
            Domain::CloudConcepts => &[
                "1.1 Understand cloud computing concepts",
                "1.2 Describe cloud reference architecture",
                "1.3 Understand security concepts relevant to cloud computing",
                "1.4 Understand design principles of secure cloud computing",
                "1.5 Evaluate cloud service providers",
            ],
            Domain::CloudDataSecurity => &[
                "2.1 Describe cloud data concepts",
                "2.2 Design and implement cloud data storage architectures",
                "2.3 Design and apply data security technologies and strategies",
                "2.4 Implement data discovery",
                "2.5 Plan and implement data classification",
                "2.6 Design and implement Information Rights Management (IRM)",
                "2.7 Plan and implement data retention, deletion and archiving policies",
                "2.8 Design and implement auditability, traceability and accountability of data events",
            ],
            Domain::PlatformInfrastructure => &[
                "3.1 Comprehend cloud infrastructure and platform components",
                "3.2 Design a secure data center",
                "3.3 Analyze risks associated with cloud infrastructure and platforms",
                "3.4 Plan and implement security controls",
                "3.5 Plan business continuity (BC) and disaster recovery (DR)",
            ],
            Domain::ApplicationSecurity => &[
                "4.1 Advocate training and awareness for application security",
                "4.2 Describe the Secure Software Development Life Cycle (SDLC) process",
                "4.3 Apply the Secure Software Development Life Cycle (SDLC)",
                "4.4 Apply cloud software assurance and validation",
                "4.5 Use verified secure software",
                "4.6 Comprehend the specifics of cloud application architecture",
                "4.7 Design appropriate identity and access management (IAM) solutions",
            ],
            Domain::SecurityOperations => &[
                "5.1 Build and implement physical and logical infrastructure for cloud environment",
                "5.2 Operate and maintain physical and logical infrastructure for cloud environment",
                "5.3 Implement operational controls and standards",
                "5.4 Support digital forensics",
                "5.5 Manage communication with relevant parties",
                "5.6 Manage security operations",
            ],
            Domain::LegalRiskCompliance => &[
                "6.1 Articulate legal requirements and unique risks within the cloud environment",
                "6.2 Understand privacy issues",
                "6.3 Understand audit process, methodologies, and required adaptations for a cloud environment",
                "6.4 Understand implications of cloud to enterprise risk management",
                "6.5 Understand outsourcing and cloud contract design",
            ],
            Domain::ReviewPractice | Domain::Other => &[],
        }
    }

    /// Parse a user- or file-supplied label.
    ///
    /// Accepts the canonical label and the older `Domain N – Title` spelling.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::MissingDomain` for blank input and
    /// `EntryError::UnknownDomain` for anything unrecognized.
    pub fn parse_label(raw: &str) -> Result<Self, EntryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EntryError::MissingDomain);
        }
        let normalized = trimmed.replacen(" \u{2013} ", ": ", 1);
        Domain::ALL
            .into_iter()
            .find(|d| d.label() == normalized)
            .ok_or_else(|| EntryError::UnknownDomain(trimmed.to_string()))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Domain {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_labels() {
        for domain in Domain::ALL {
            assert_eq!(Domain::parse_label(domain.label()).unwrap(), domain);
        }
    }

    #[test]
    fn parses_legacy_en_dash_label() {
        let parsed = Domain::parse_label("Domain 2 \u{2013} Cloud Data Security").unwrap();
        assert_eq!(parsed, Domain::CloudDataSecurity);
    }

    #[test]
    fn blank_label_is_missing() {
        assert_eq!(Domain::parse_label("   "), Err(EntryError::MissingDomain));
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert_eq!(
            Domain::parse_label("Domain 9: Astrology"),
            Err(EntryError::UnknownDomain("Domain 9: Astrology".into()))
        );
    }

    #[test]
    fn only_scored_domains_have_outline_catalogs() {
        for domain in Domain::ALL {
            assert_eq!(
                domain.outline_number().is_some(),
                !domain.sub_objectives().is_empty(),
                "{domain}"
            );
        }
    }
}
