pub struct Social {
    pub label: &'static str,
    pub handle: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const MAIN_SOCIALS: &[Social] = &[Social {
    label: "Instagram",
    handle: "@onemark.creative",
    href: "https://www.instagram.com/onemark.creative",
    icon: "IG",
}];

pub struct InstagramAccount {
    pub handle: &'static str,
    pub sub: &'static str,
    pub emoji: &'static str,
    pub href: &'static str,
}

pub const IG_ACCOUNTS: &[InstagramAccount] = &[
    InstagramAccount {
        handle: "@stories.onemark",
        sub: "Behind the build",
        emoji: "📸",
        href: "https://www.instagram.com/stories.onemark",
    },
    InstagramAccount {
        handle: "@onemark.digi",
        sub: "Main Studio",
        emoji: "🌐",
        href: "https://www.instagram.com/onemark.digi",
    },
];
