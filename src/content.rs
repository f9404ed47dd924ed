// Copy for the landing page. Rendered in order, never filtered or sorted.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Work", href: "#work" },
    NavLink { label: "About", href: "#about" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "Privacy", href: "#" },
    NavLink { label: "Terms", href: "#" },
    NavLink { label: "Contact", href: "#" },
];

pub const STATS: &[Stat] = &[
    Stat { number: "200+", label: "Projects Delivered" },
    Stat { number: "98%", label: "Client Satisfaction" },
    Stat { number: "50+", label: "Team Members" },
    Stat { number: "15+", label: "Years Experience" },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Brand Strategy",
        description: "Data-driven insights to position your brand for maximum impact",
        icon: "📊",
    },
    Service {
        title: "Web Development",
        description: "Cutting-edge websites built for performance and scalability",
        icon: "💻",
    },
    Service {
        title: "Digital Marketing",
        description: "Strategic campaigns that drive measurable results",
        icon: "🚀",
    },
    Service {
        title: "UX/UI Design",
        description: "Beautiful, intuitive interfaces that users love",
        icon: "🎨",
    },
    Service {
        title: "Analytics & Insights",
        description: "Transform data into actionable business intelligence",
        icon: "📈",
    },
    Service {
        title: "Consulting",
        description: "Expert guidance to navigate your digital transformation",
        icon: "💡",
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Analyse",
        description: "Deep dive into your business, market, and audience to uncover opportunities",
    },
    ProcessStep {
        step: "02",
        title: "Act",
        description: "Execute strategic initiatives with precision and agility",
    },
    ProcessStep {
        step: "03",
        title: "Achieve",
        description: "Deliver measurable results that exceed expectations",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_have_expected_sizes() {
        assert_eq!(STATS.len(), 4);
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(PROCESS_STEPS.len(), 3);
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        let numbers: Vec<&str> = PROCESS_STEPS.iter().map(|s| s.step).collect();
        assert_eq!(numbers, ["01", "02", "03"]);
    }

    #[test]
    fn nav_anchors_point_into_the_page() {
        assert!(NAV_LINKS.iter().all(|link| link.href.starts_with('#') && link.href.len() > 1));
    }
}
