//! Static landing content

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlaceholderImage {
    pub id: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub image_hint: &'static str,
}

/// "How Our AI Scoring Works", in display order
pub const FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        title: "Comprehensive Data Ingestion",
        description: "Secure 360 seamlessly integrates with all your existing security tools and logs, collecting data in real-time to build a complete picture of your environment.",
    },
    FeatureCard {
        title: "AI-Powered Threat Analysis",
        description: "Our proprietary AI model analyzes incoming data, identifying patterns and correlating events to distinguish real threats from noise with unparalleled accuracy.",
    },
    FeatureCard {
        title: "Actionable, Prioritized Alerts",
        description: "Forget alert fatigue. You receive a curated list of high-priority security incidents, complete with context and actionable recommendations for swift remediation.",
    },
];

pub const PLACEHOLDER_IMAGES: [PlaceholderImage; 1] = [PlaceholderImage {
    id: "contact-illustration",
    description: "An abstract illustration for the contact section.",
    image_url: "https://images.unsplash.com/photo-1581161461543-e249191d3e5a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3NDE5ODJ8MHwxfHNlYXJjaHwxfHxzZWN1cml0eSUyMGFic3RyYWN0fGVufDB8fHx8MTc2MTA5OTIyOXww&ixlib=rb-4.1.0&q=80&w=1080",
    image_hint: "security abstract",
}];

pub fn placeholder_image(id: &str) -> Option<PlaceholderImage> {
    PLACEHOLDER_IMAGES.iter().find(|image| image.id == id).copied()
}
