//! Marketing copy rendered by the landing page and the layout chrome.

use crate::carousel::Slide;
use crate::Route;

pub struct InsuranceType {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub image: &'static str,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub comment: &'static str,
    pub rating: u8,
}

pub struct PricingTier {
    pub title: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

pub struct Milestone {
    pub year: &'static str,
    pub event: &'static str,
}

pub struct TitledText {
    pub title: &'static str,
    pub text: &'static str,
}

pub struct Feature {
    pub title: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

pub struct CounterStat {
    pub label: &'static str,
    pub value: u32,
    pub suffix: &'static str,
}

pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const INSURANCE_TYPES: &[InsuranceType] = &[
    InsuranceType {
        title: "Comprehensive Insurance",
        description: "Covers you, your vehicle, and third parties in case of accidents, theft, or damage.",
        details: "Comprehensive insurance covers your own vehicle and property, as well as any third parties involved in an incident. It includes cover for theft, fire, natural disasters, and vandalism.",
        image: "/images/documentinsu.jpg",
    },
    InsuranceType {
        title: "Third Party Only",
        description: "Meets legal minimum requirements and covers others if you’re at fault.",
        details: "Third Party Only (TPO) insurance is the most basic form of car insurance. It covers damage to other people’s property or injury to others if you cause an accident. It does not cover your vehicle.",
        image: "/images/third-party.jpeg",
    },
    InsuranceType {
        title: "Fire & Theft Only",
        description: "Protects your vehicle against fire and theft without full accident cover.",
        details: "Third Party, Fire and Theft covers your vehicle if it’s stolen or damaged by fire. It also provides the same protection as TPO for any third-party claims.",
        image: "/images/fire-theft.jpg",
    },
    InsuranceType {
        title: "Fleet Insurance",
        description: "Best for businesses managing multiple vehicles.",
        details: "Fleet Insurance allows businesses to insure multiple vehicles under one policy. This is ideal for logistics companies, service fleets, or sales teams.",
        image: "/images/fleet.jpg",
    },
];

/// Read-more slides derived from the insurance types, in the same order.
pub fn insurance_slides() -> Vec<Slide> {
    INSURANCE_TYPES
        .iter()
        .map(|t| Slide {
            title: t.title,
            text: t.details,
            image: t.image,
        })
        .collect()
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What documents do I need to get a quote?",
        answer: "You’ll need your NRC or driver's license, vehicle details, and previous insurance info (if any).",
    },
    FaqEntry {
        question: "How long does it take to get insured?",
        answer: "Most users are insured within minutes after submitting required details and making payment.",
    },
    FaqEntry {
        question: "Can I insure multiple vehicles?",
        answer: "Yes! Our Fleet Insurance plan is designed for businesses or individuals managing multiple vehicles.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Thandi Mwansa",
        comment: "I never knew insurance could be this quick and easy. I got my quote in under 3 minutes!",
        rating: 5,
    },
    Testimonial {
        name: "John Zulu",
        comment: "Their support team helped me understand what coverage I needed for my business fleet.",
        rating: 4,
    },
    Testimonial {
        name: "Rachel Banda",
        comment: "The whole process was smooth and completely online. Highly recommend Hobbiton!",
        rating: 5,
    },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        title: "Basic",
        price: "ZMW 150/mo",
        features: &["Third Party Only", "Legal Compliance", "Quick Setup"],
    },
    PricingTier {
        title: "Standard",
        price: "ZMW 300/mo",
        features: &["Fire & Theft", "TPO Cover", "Partial Own Damage"],
    },
    PricingTier {
        title: "Comprehensive",
        price: "ZMW 500/mo",
        features: &["Full Vehicle Protection", "Theft + Fire", "Natural Disaster Cover"],
    },
];

pub const MILESTONES: &[Milestone] = &[
    Milestone { year: "2019", event: "Founded in Lusaka" },
    Milestone { year: "2020", event: "Reached 1,000 Users" },
    Milestone { year: "2022", event: "Introduced Digital Quotes" },
    Milestone { year: "2024", event: "15,000+ Customers Served" },
];

pub const CORE_VALUES: &[TitledText] = &[
    TitledText { title: "Transparency", text: "We’re open, honest, and upfront about everything." },
    TitledText { title: "Empathy", text: "We listen. We care. We serve real people." },
    TitledText { title: "Innovation", text: "We’re building the future of African insurance." },
];

pub const WHY_CHOOSE: &[Feature] = &[
    Feature {
        title: "Trusted Coverage",
        text: "We partner with leading insurers to provide comprehensive, reliable coverage options tailored to you.",
        icon: "🛡️",
    },
    Feature {
        title: "Instant Online Quotes",
        text: "Skip the paperwork and get your motor insurance quote in minutes from any device.",
        icon: "⚡",
    },
    Feature {
        title: "Local Expertise",
        text: "We understand the Zambian market and offer localized solutions for Lusaka, Copperbelt, and beyond.",
        icon: "🌍",
    },
];

pub const COUNTERS: &[CounterStat] = &[
    CounterStat { label: "Quotes Generated", value: 82, suffix: "" },
    CounterStat { label: "Vehicles Covered", value: 53, suffix: "" },
    CounterStat { label: "Customer Satisfaction", value: 98, suffix: "%" },
];

pub const PRODUCT_LINKS: &[NavLink] = &[
    NavLink { label: "Insurance", route: Route::Insurance },
    NavLink { label: "Savings", route: Route::Savings },
    NavLink { label: "Loans", route: Route::Loans },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "Home", route: Route::Home },
    NavLink { label: "Get Quote", route: Route::Quote },
    NavLink { label: "Insurance", route: Route::Insurance },
    NavLink { label: "Savings", route: Route::Savings },
    NavLink { label: "Loans", route: Route::Loans },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "LinkedIn", url: "https://www.linkedin.com/company/hobbiton" },
    SocialLink { name: "Twitter", url: "https://twitter.com/hobbiton_tech" },
];

pub const CONTACT_PHONE: &str = "+260 977 000 000";
pub const CONTACT_EMAIL: &str = "support@hobbiton.co.zm";
pub const CONTACT_ADDRESS: &str = "Lusaka, Zambia";

pub const RATING_SUMMARY: &str = "4.9/5 from 1,200+ Users";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_follow_insurance_types() {
        let slides = insurance_slides();
        assert_eq!(slides.len(), INSURANCE_TYPES.len());
        assert_eq!(slides[3].title, "Fleet Insurance");
        assert_eq!(slides[0].text, INSURANCE_TYPES[0].details);
    }

    #[test]
    fn pricing_tiers_match_recommendation_labels() {
        let titles: Vec<_> = PRICING_TIERS.iter().map(|t| t.title).collect();
        assert_eq!(titles, ["Basic", "Standard", "Comprehensive"]);
    }
}
