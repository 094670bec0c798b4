/// One live site in the showcase catalog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub id: usize,
    pub num: &'static str,
    pub title: &'static str,
    pub tag: &'static str,
    pub desc: &'static str,
    pub color: &'static str,
    pub url: &'static str,
    pub about: &'static str,
    pub importance: &'static str,
    pub features: [&'static str; 3],
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 0,
        num: "01",
        title: "Anil × Eswari",
        tag: "Wedding",
        desc: "Wedding Celebration Site",
        color: "#FF4D6D",
        url: "https://anil-eswari.netlify.app/",
        about: "A vibrant celebration site for Anil & Eswari, bringing together their ceremony schedule, family message, and wedding memories in one joyful experience.",
        importance: "Families are spread across cities and countries. A website becomes the central hub: your out-of-town guests know exactly where to go, what to wear, and when to arrive.",
        features: [
            "Live countdown to the wedding day",
            "Family greeting section",
            "Shareable across WhatsApp & Instagram",
        ],
    },
    Project {
        id: 1,
        num: "02",
        title: "Nazurul × Sajida",
        tag: "Wedding",
        desc: "Elegant Wedding Story",
        color: "#FF4D6D",
        url: "https://nazurul-sajida.netlify.app/",
        about: "An elegant digital invitation for Nazurul & Sajida. Warm, intimate, and deeply personal, designed to make every guest feel genuinely welcomed.",
        importance: "Paper invitations get lost. Digital ones travel instantly and can be opened again and again. Give your guests a page they'll revisit, not a message they'll scroll past.",
        features: [
            "Animated digital invitation",
            "RSVP-ready design",
            "Mobile-first for easy sharing",
        ],
    },
    Project {
        id: 2,
        num: "03",
        title: "Venkat × Nandini",
        tag: "Wedding",
        desc: "Interactive Wedding Keepsake",
        color: "#FF4D6D",
        url: "https://venkat-nandini.netlify.app/",
        about: "A beautifully crafted wedding site for Venkat & Nandini, capturing their love story, ceremony details, and a live countdown to the big day.",
        importance: "Your wedding is a once-in-a-lifetime event. A dedicated site lets your guests experience the joy before they arrive. No WhatsApp forwards, no confusion. Just one beautiful link shared with everyone you love.",
        features: [
            "Live countdown to the wedding day",
            "Couple's story & photo gallery",
            "Venue info & event timeline",
        ],
    },
    Project {
        id: 3,
        num: "04",
        title: "Valentine Week",
        tag: "Valentine",
        desc: "Live Countdown Experience",
        color: "#FFB547",
        url: "https://mavi-valentine-week.vercel.app/",
        about: "A lively, animated Valentine Week countdown page that builds anticipation day by day. A digital surprise that makes love feel like a celebration.",
        importance: "Saying 'I love you' with a custom-built page hits different than a text message. It's a gesture they'll screenshot, share, and remember long after Valentine's Day ends.",
        features: [
            "Day-by-day Valentine countdown",
            "Animated love messages",
            "Shareable surprise link",
        ],
    },
    Project {
        id: 4,
        num: "05",
        title: "Viswanath",
        tag: "Portfolio",
        desc: "Personal Portfolio Showcase",
        color: "#00F5FF",
        url: "https://viswabnath.github.io/portfolio/",
        about: "A sleek personal portfolio for Viswanath, showcasing his work, skills, and story in a way that makes recruiters and clients stop scrolling and start reading.",
        importance: "Your LinkedIn profile is one of thousands. A personal portfolio site is yours alone: your design, your story, your rules.",
        features: [
            "Projects & skills showcase",
            "Custom animations & interactions",
            "Optimised for recruiters & clients",
        ],
    },
    Project {
        id: 5,
        num: "06",
        title: "Family Wall",
        tag: "Community",
        desc: "Community Memory Platform",
        color: "#00F5FF",
        url: "https://familywall.in/",
        about: "A private digital space where families come together to share memories, milestones, and messages. A living wall that grows with every generation.",
        importance: "Photo albums fade. WhatsApp groups get chaotic. Family Wall is a dedicated space where your family's most precious moments are preserved and accessible to everyone.",
        features: [
            "Shared family memory board",
            "Photo & milestone sharing",
            "Private, family-only access",
        ],
    },
];

pub fn find_project(id: usize) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// "03 / 06" style position label for the info bar.
pub fn position_label(project: &Project) -> String {
    format!("{} / {:02}", project.num, PROJECTS.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_positions() {
        for (idx, project) in PROJECTS.iter().enumerate() {
            assert_eq!(project.id, idx);
            assert_eq!(project.num, format!("{:02}", idx + 1));
        }
    }

    #[test]
    fn urls_are_https() {
        assert!(PROJECTS.iter().all(|p| p.url.starts_with("https://")));
    }

    #[test]
    fn position_label_pads_total() {
        let project = find_project(2).unwrap();
        assert_eq!(position_label(project), "03 / 06");
        assert!(find_project(PROJECTS.len()).is_none());
    }
}
