/// Site-wide color scheme picked by the sun/moon toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Every themed class string the views need, resolved once per render.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub main: &'static str,
    pub backdrop: &'static str,
    pub backdrop_glow: &'static str,
    pub backdrop_image: &'static str,
    pub backdrop_fade: &'static str,
    pub nav: &'static str,
    pub nav_link: &'static str,
    pub mobile_menu: &'static str,
    pub toggle: &'static str,
    pub card: &'static str,
    pub button: &'static str,
    pub pill: &'static str,
    pub chip: &'static str,
    pub input: &'static str,
    pub border: &'static str,
    pub subtext: &'static str,
    pub gradient_text: &'static str,
    pub accent: &'static str,
    pub icon_badge: &'static str,
    pub skill_track: &'static str,
    pub skill_bar: &'static str,
    pub social_link: &'static str,
    pub success_badge: &'static str,
    pub toast_info: &'static str,
    pub toast_success: &'static str,
}

static DARK: Palette = Palette {
    main: "bg-black text-white",
    backdrop: "fixed inset-0 bg-black z-0",
    backdrop_glow: "absolute inset-0 opacity-20 bg-[radial-gradient(ellipse_at_center,_var(--tw-gradient-stops))] from-purple-900 via-black to-black",
    backdrop_image: "absolute inset-0 bg-[url('https://images.unsplash.com/photo-1534796636912-3b95b3ab5986?q=80&w=2071')] mix-blend-overlay opacity-10 bg-cover",
    backdrop_fade: "absolute inset-0 bg-gradient-to-b from-transparent via-black/50 to-black",
    nav: "bg-black/80 backdrop-blur-md border-b border-gray-800",
    nav_link: "text-gray-300 hover:text-white",
    mobile_menu: "bg-black/95",
    toggle: "bg-gray-800 text-yellow-400",
    card: "bg-gradient-to-br from-gray-900/60 to-black/60 backdrop-blur-md border border-white/10",
    button: "bg-white/10 backdrop-blur-md border border-white/20 text-white hover:border-white/40",
    pill: "bg-pink-600/20 text-pink-400 border border-pink-600/30",
    chip: "bg-white/10",
    input: "bg-gray-900/50 border border-gray-700 text-white placeholder-gray-500 focus:border-purple-500",
    border: "border-gray-800",
    subtext: "text-gray-400",
    gradient_text: "bg-gradient-to-r from-pink-500 to-purple-600 text-transparent bg-clip-text",
    accent: "text-pink-400",
    icon_badge: "bg-pink-600/20 text-pink-400",
    skill_track: "bg-gray-800",
    skill_bar: "bg-gradient-to-r from-pink-500 to-purple-600",
    social_link: "text-gray-400 hover:text-white",
    success_badge: "bg-green-500/20 text-green-400",
    toast_info: "bg-gradient-to-r from-purple-600 to-pink-600",
    toast_success: "bg-green-500/80",
};

static LIGHT: Palette = Palette {
    main: "bg-white text-gray-900",
    backdrop: "fixed inset-0 bg-white z-0",
    backdrop_glow: "absolute inset-0 opacity-10 bg-[radial-gradient(ellipse_at_center,_var(--tw-gradient-stops))] from-purple-200 via-white to-white",
    backdrop_image: "absolute inset-0 bg-[url('https://images.unsplash.com/photo-1534796636912-3b95b3ab5986?q=80&w=2071')] mix-blend-color-burn opacity-5 bg-cover",
    backdrop_fade: "absolute inset-0 bg-gradient-to-b from-transparent via-white/50 to-white",
    nav: "bg-white/80 backdrop-blur-md border-b border-gray-200",
    nav_link: "text-gray-700 hover:text-black",
    mobile_menu: "bg-white/95",
    toggle: "bg-gray-200 text-gray-800",
    card: "bg-gradient-to-br from-gray-100 to-white/90 backdrop-blur-md border border-gray-200",
    button: "bg-black/10 backdrop-blur-md border border-black/20 text-gray-900 hover:border-black/40",
    pill: "bg-purple-100 text-purple-700 border border-purple-200",
    chip: "bg-black/5",
    input: "bg-gray-100/50 border border-gray-300 text-gray-800 placeholder-gray-400 focus:border-purple-500",
    border: "border-gray-200",
    subtext: "text-gray-600",
    gradient_text: "bg-gradient-to-r from-indigo-600 to-purple-700 text-transparent bg-clip-text",
    accent: "text-purple-600",
    icon_badge: "bg-purple-100 text-purple-600",
    skill_track: "bg-gray-200",
    skill_bar: "bg-gradient-to-r from-indigo-600 to-purple-700",
    social_link: "text-gray-600 hover:text-black",
    success_badge: "bg-green-100 text-green-600",
    toast_info: "bg-gradient-to-r from-indigo-600 to-purple-600",
    toast_success: "bg-green-500",
};

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Accessible label for the button that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light mode",
            Theme::Light => "Switch to dark mode",
        }
    }
}
