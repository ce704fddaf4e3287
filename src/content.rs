//! The authored text of the TrailBuddy Terms of Service & Privacy Policy.
//!
//! Everything here is `'static`: the page renders straight from [`TERMS`] and
//! only the "last updated" line is computed at render time.

pub const CONTACT_EMAIL: &str = "support@trailbuddy.ca";
pub const STRAVA_API_TERMS_URL: &str = "https://www.strava.com/legal/api";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalDocument {
    pub title: &'static str,
    pub sections: &'static [Section],
    pub footnote: Footnote,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    /// Anchor id, so `/legal#api-access` links work.
    pub id: &'static str,
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static str),
    List(&'static [&'static str]),
    /// Shown as plain text, not a mailto link.
    Contact {
        prompt: &'static str,
        email: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footnote {
    pub lead: &'static str,
    pub link_text: &'static str,
    pub href: &'static str,
}

impl LegalDocument {
    pub fn headings(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().map(|section| section.heading)
    }

    /// All visible text except the date line, in document order.
    pub fn plain_text(&self) -> String {
        let mut out = String::from(self.title);
        out.push('\n');
        for section in self.sections {
            out.push('\n');
            out.push_str(section.heading);
            out.push('\n');
            for block in section.blocks {
                block.write_text(&mut out);
            }
        }
        out.push('\n');
        out.push_str(self.footnote.lead);
        out.push(' ');
        out.push_str(self.footnote.link_text);
        out.push('\n');
        out
    }
}

impl Section {
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(Block::is_empty)
    }
}

impl Block {
    pub fn is_empty(&self) -> bool {
        match self {
            Block::Paragraph(text) => text.trim().is_empty(),
            Block::List(items) => items.iter().all(|item| item.trim().is_empty()),
            Block::Contact { email, .. } => email.trim().is_empty(),
        }
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Block::Paragraph(text) => {
                out.push_str(text);
                out.push('\n');
            }
            Block::List(items) => {
                for item in items.iter() {
                    out.push_str("- ");
                    out.push_str(item);
                    out.push('\n');
                }
            }
            Block::Contact { prompt, email } => {
                out.push_str(prompt);
                out.push(' ');
                out.push_str(email);
                out.push('\n');
            }
        }
    }
}

pub static TERMS: LegalDocument = LegalDocument {
    title: "Terms of Service & Privacy Policy",
    sections: &[
        Section {
            id: "service-overview",
            heading: "Service Overview",
            blocks: &[
                Block::Paragraph(
                    "TrailBuddy is a companion tool for runners, hikers and cyclists. After you connect your Strava account, TrailBuddy reads your recent activities to suggest routes, summarize your training and help you plan your next outing.",
                ),
                Block::Paragraph(
                    "By connecting your account or using any part of the service, you agree to these terms.",
                ),
            ],
        },
        Section {
            id: "data-handling",
            heading: "Data Handling",
            blocks: &[
                Block::Paragraph("When you authorize TrailBuddy, we access only the data needed to run the service:"),
                Block::List(&[
                    "Your Strava athlete profile (name, profile picture and city)",
                    "Activity summaries such as distance, duration, elevation and type",
                    "Route and map data for activities you have chosen to share",
                ]),
                Block::Paragraph(
                    "Activity data is cached for at most 7 days so pages load quickly. After 7 days it is deleted automatically and fetched again from Strava the next time you use TrailBuddy.",
                ),
                Block::Paragraph("We never sell your data and we never share it with advertisers."),
            ],
        },
        Section {
            id: "your-rights",
            heading: "Your Rights",
            blocks: &[
                Block::Paragraph("You stay in control of your information. At any time you can:"),
                Block::List(&[
                    "Disconnect TrailBuddy from the Strava settings page, which stops all further data access",
                    "Ask us for a copy of the data we currently hold about you",
                    "Ask us to delete your data immediately rather than waiting for it to expire",
                    "Correct profile details by updating them on Strava",
                ]),
            ],
        },
        Section {
            id: "service-terms",
            heading: "Service Terms",
            blocks: &[
                Block::Paragraph(
                    "TrailBuddy is provided free of charge for personal, non-commercial use. You agree not to misuse the service, including by:",
                ),
                Block::List(&[
                    "Attempting to access data belonging to other athletes",
                    "Scraping, reselling or redistributing content obtained through TrailBuddy",
                    "Interfering with the operation or security of the service",
                ]),
                Block::Paragraph(
                    "We may suspend access for accounts that break these terms, and we may change or discontinue features at any time.",
                ),
            ],
        },
        Section {
            id: "disclaimers",
            heading: "Disclaimers",
            blocks: &[
                Block::Paragraph(
                    "Route suggestions and training summaries are informational only. Trail conditions, weather and closures change constantly, so always check local conditions and use your own judgment before heading out.",
                ),
                Block::Paragraph(
                    "The service is provided \"as is\" without warranties of any kind. TrailBuddy is not liable for injuries, losses or damages arising from your use of the service or from activities planned with it.",
                ),
            ],
        },
        Section {
            id: "privacy-compliance",
            heading: "Privacy Compliance",
            blocks: &[
                Block::Paragraph(
                    "We handle personal information in line with Canada's Personal Information Protection and Electronic Documents Act (PIPEDA) and applicable provincial privacy laws.",
                ),
                Block::List(&[
                    "Data is collected only for the purposes described above",
                    "Data is stored on encrypted servers and transmitted over HTTPS",
                    "Access to stored data is limited to what is needed to operate the service",
                ]),
            ],
        },
        Section {
            id: "api-access",
            heading: "API Access Terms",
            blocks: &[
                Block::Paragraph(
                    "TrailBuddy uses the Strava API and is not affiliated with, endorsed by or sponsored by Strava. Your use of Strava data through TrailBuddy is also governed by Strava's own terms and privacy policy.",
                ),
                Block::Paragraph(
                    "We respect Strava's rate limits and attribution requirements, and we display Strava data only to the athlete it belongs to.",
                ),
            ],
        },
        Section {
            id: "contact",
            heading: "Contact Information",
            blocks: &[
                Block::Paragraph(
                    "Questions about these terms, requests to access or delete your data, and privacy concerns are all welcome.",
                ),
                Block::Contact {
                    prompt: "Email us at",
                    email: CONTACT_EMAIL,
                },
            ],
        },
        Section {
            id: "changes",
            heading: "Changes to These Terms",
            blocks: &[Block::Paragraph(
                "We may update these terms from time to time. When we make material changes we will update the date at the top of this page, and continued use of TrailBuddy after a change means you accept the updated terms.",
            )],
        },
    ],
    footnote: Footnote {
        lead: "TrailBuddy is built on the Strava API. For details on how Strava governs API use, see the",
        link_text: "Strava API Agreement",
        href: STRAVA_API_TERMS_URL,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_nine_sections_in_order() {
        let headings: Vec<_> = TERMS.headings().collect();
        assert_eq!(
            headings,
            [
                "Service Overview",
                "Data Handling",
                "Your Rights",
                "Service Terms",
                "Disclaimers",
                "Privacy Compliance",
                "API Access Terms",
                "Contact Information",
                "Changes to These Terms",
            ]
        );
    }

    #[test]
    fn no_section_is_empty() {
        for section in TERMS.sections {
            assert!(!section.blocks.is_empty(), "{} has no blocks", section.heading);
            assert!(!section.is_empty(), "{} is blank", section.heading);
        }
    }

    #[test]
    fn section_ids_are_unique() {
        let mut ids: Vec<_> = TERMS.sections.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TERMS.sections.len());
    }

    #[test]
    fn contact_email_appears_once_in_contact_section() {
        let text = TERMS.plain_text();
        assert_eq!(text.matches(CONTACT_EMAIL).count(), 1);

        let contact = TERMS
            .sections
            .iter()
            .find(|s| s.heading == "Contact Information")
            .expect("contact section");
        assert!(contact
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Contact { email, .. } if *email == "support@trailbuddy.ca")));
    }

    #[test]
    fn footnote_links_to_strava_api_terms() {
        assert_eq!(TERMS.footnote.href, "https://www.strava.com/legal/api");
    }

    #[test]
    fn blank_blocks_are_empty() {
        assert!(Block::Paragraph("  ").is_empty());
        assert!(Block::List(&["", " "]).is_empty());
        assert!(!Block::List(&["", "x"]).is_empty());
        let section = Section {
            id: "x",
            heading: "X",
            blocks: &[],
        };
        assert!(section.is_empty());
    }
}
