//! Literal page content.
//!
//! Everything here is `'static` and built at compile time; components borrow
//! it instead of rebuilding lists on each render.

use serde::Serialize;
use serde_json::{Value, json};

use super::glyph::Glyph;

pub const BRAND: &str = "theseven++";
pub const PRODUCT: &str = "FUOJ";
pub const CONTACT_EMAIL: &str = "thesevenplusplus@gmail.com";
pub const SOCIAL_URL: &str = "https://www.facebook.com/";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureItem {
    pub icon: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub photo_path: &'static str,
}

/// A static image with its intrinsic size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AssetRef {
    pub path: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

pub static FEATURES: [FeatureItem; 4] = [
    FeatureItem {
        icon: Glyph::Puzzle,
        title: "Diverse Problem Set",
        description: "Explore a wide range of coding challenges across various difficulty levels and topics, designed to enhance your problem-solving skills.",
    },
    FeatureItem {
        icon: Glyph::Zap,
        title: "Real-time Feedback",
        description: "Receive instant feedback on your code submissions, helping you identify and correct errors quickly for a more efficient learning experience.",
    },
    FeatureItem {
        icon: Glyph::Users,
        title: "Competitive Contests",
        description: "Participate in exciting coding competitions to challenge yourself, compete with peers, and improve your skills in a fun, engaging environment.",
    },
    FeatureItem {
        icon: Glyph::Book,
        title: "Learning Resources",
        description: "Access a comprehensive library of tutorials, articles, and video lessons to support your learning journey and master new programming concepts.",
    },
];

pub static TEAM: [TeamMember; 8] = [
    TeamMember { name: "Nguyen Tuan Vu", role: "Leader", photo_path: "/tuanvu.jpg" },
    TeamMember { name: "Nguyen Dinh Phong", role: "Developer Team", photo_path: "/dinhphong.jpg" },
    TeamMember { name: "Nguyen Thanh Tung", role: "Developer Team", photo_path: "/tung.jpg" },
    TeamMember { name: "Tran Ngoc Huy", role: "Sub Leader", photo_path: "/ngochuy.jpg" },
    TeamMember { name: "Nguyen Chien Nguyen", role: "Business Team", photo_path: "/chiennguyen.jpg" },
    TeamMember { name: "Doan Cong Huy", role: "Business Team", photo_path: "/conghuy.jpg" },
    TeamMember { name: "Nguyen Xuan Kien", role: "Business Team", photo_path: "/kien.jpg" },
    TeamMember { name: "Khuat Dung An", role: "Business Team", photo_path: "/dungan.jpg" },
];

pub const HERO_IMAGE: AssetRef = AssetRef {
    path: "/placeholder.svg",
    alt: "FUOJ Illustration",
    width: 384,
    height: 384,
};

pub const ABOUT_IMAGE: AssetRef = AssetRef {
    path: "/team.jpg",
    alt: "Our Vision",
    width: 600,
    height: 400,
};

pub const HERO_TAGLINE: &str =
    "Empowering developers with cutting-edge tools for seamless coding experiences.";

pub const ABOUT_VISION: &str = "At FUOJ, we are driven by the vision of becoming the leading platform for programming skill learning and assessment at FPT University. Our goal is to create an effective and innovative learning environment that empowers students and supports educators.";

pub static ABOUT_MISSION: [&str; 3] = [
    "Provide rapid and accurate automated grading tools for programming assignments.",
    "Foster students' programming mindset through regular hands-on practice.",
    "Offer educators an efficient and user-friendly system for managing and grading assignments.",
];

pub const ABOUT_CLOSING: &str = "By focusing on these key areas, we aim to revolutionize the way programming is taught and learned at FPT University, preparing students for successful careers in the ever-evolving world of technology.";

pub const PAGE_DESCRIPTION: &str = "FUOJ is the online judge for programming practice and automated grading at FPT University.";

pub fn mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

pub fn copyright(year: i32) -> String {
    format!("© {year} {BRAND}. All rights reserved.")
}

/// schema.org description of the team and product for the JSON-LD block.
pub fn structured_data() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": BRAND,
        "email": CONTACT_EMAIL,
        "sameAs": [SOCIAL_URL],
        "description": PAGE_DESCRIPTION,
        "member": TEAM.iter().map(|m| json!({
            "@type": "Person",
            "name": m.name,
            "jobTitle": m.role,
            "image": m.photo_path,
        })).collect::<Vec<_>>(),
        "makesOffer": {
            "@type": "Offer",
            "itemOffered": {
                "@type": "SoftwareApplication",
                "name": PRODUCT,
                "applicationCategory": "EducationalApplication",
                "featureList": FEATURES.iter().map(|f| f.title).collect::<Vec<_>>(),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lists_are_non_empty() {
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(TEAM.len(), 8);
        assert_eq!(ABOUT_MISSION.len(), 3);
    }

    #[test]
    fn test_team_has_no_duplicates() {
        let names: HashSet<_> = TEAM.iter().map(|m| m.name).collect();
        let photos: HashSet<_> = TEAM.iter().map(|m| m.photo_path).collect();
        assert_eq!(names.len(), TEAM.len());
        assert_eq!(photos.len(), TEAM.len());
    }

    #[test]
    fn test_photo_paths_are_rooted() {
        for member in &TEAM {
            assert!(member.photo_path.starts_with('/'), "{}", member.name);
        }
        assert!(HERO_IMAGE.path.starts_with('/'));
        assert!(ABOUT_IMAGE.path.starts_with('/'));
    }

    #[test]
    fn test_bundled_illustration_is_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        assert!(public.join(HERO_IMAGE.path.trim_start_matches('/')).is_file());
        // Photos are supplied with the deployment, never bundled.
        for path in TEAM.iter().map(|m| m.photo_path).chain([ABOUT_IMAGE.path]) {
            assert!(path.starts_with('/') && path.ends_with(".jpg"), "{path}");
        }
    }

    #[test]
    fn test_team_leads_first() {
        assert_eq!(TEAM[0].role, "Leader");
        assert_eq!(TEAM[3].role, "Sub Leader");
    }

    #[test]
    fn test_mailto_and_copyright() {
        assert_eq!(mailto(), "mailto:thesevenplusplus@gmail.com");
        assert_eq!(copyright(2024), "© 2024 theseven++. All rights reserved.");
    }

    #[test]
    fn test_structured_data_mirrors_content() {
        let data = structured_data();
        assert_eq!(data["@type"], "Organization");
        assert_eq!(data["name"], BRAND);
        let members = data["member"].as_array().unwrap();
        assert_eq!(members.len(), TEAM.len());
        assert_eq!(members[0]["name"], "Nguyen Tuan Vu");
        let features = data["makesOffer"]["itemOffered"]["featureList"]
            .as_array()
            .unwrap();
        assert_eq!(features.len(), FEATURES.len());
        assert_eq!(features[1], "Real-time Feedback");
    }

    #[test]
    fn test_feature_serializes_glyph_name() {
        let json = serde_json::to_value(FEATURES[0]).unwrap();
        assert_eq!(json["icon"], "puzzle");
        assert_eq!(json["title"], "Diverse Problem Set");
    }
}
