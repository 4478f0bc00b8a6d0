// SPDX-License-Identifier: MPL-2.0
//! Literal page content.
//!
//! Prose lives in the translation files; this module holds what is not
//! translated (names, affiliations, URLs, image file names) and the i18n keys
//! tying each block to its text.

/// Navigation anchors of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Topics,
    Speakers,
    Directions,
    Footer,
}

impl Section {
    /// All anchors, in page order.
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Topics,
        Section::Speakers,
        Section::Directions,
        Section::Footer,
    ];

    /// Anchor identifier.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Topics => "topics",
            Section::Speakers => "speakers",
            Section::Directions => "directions",
            Section::Footer => "footer",
        }
    }

    /// i18n key of the navigation label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::About => "nav-about",
            Section::Topics => "nav-curriculum",
            Section::Speakers => "nav-speakers",
            Section::Directions => "nav-directions",
            Section::Footer => "nav-contact",
        }
    }
}

/// Hero carousel images, in rotation order.
pub const CAROUSEL_IMAGES: [&str; 4] = ["1.png", "11.png", "111.png", "1111.png"];

/// Campus photo shown in the directions section.
pub const CAMPUS_IMAGE: &str = "11.png";

/// Campus location on Google Maps.
pub const MAP_URL: &str = "https://g.co/kgs/jP4D4Eg";

/// Topic chips below the about intro (i18n keys).
pub const TOPIC_CHIPS: [&str; 4] = [
    "about-chip-image-processing",
    "about-chip-healthcare",
    "about-chip-data-synthesis",
    "about-chip-medical-imaging",
];

/// Target audience bullet points (i18n keys).
pub const AUDIENCE: [&str; 3] = [
    "about-audience-students",
    "about-audience-clinicians",
    "about-audience-industry",
];

/// Program objectives as (title key, body key).
pub const OBJECTIVES: [(&str, &str); 4] = [
    ("objective-foundations-title", "objective-foundations-body"),
    ("objective-healthcare-title", "objective-healthcare-body"),
    ("objective-practice-title", "objective-practice-body"),
    ("objective-networking-title", "objective-networking-body"),
];

/// A framework or model family covered by the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const TECHNOLOGIES: [Technology; 6] = [
    Technology {
        icon: "🌀",
        name: "Diffusion Models",
        description: "State-of-the-art generative models",
    },
    Technology {
        icon: "🎭",
        name: "GANs",
        description: "Generative Adversarial Networks",
    },
    Technology {
        icon: "🔄",
        name: "VAEs",
        description: "Variational Autoencoders",
    },
    Technology {
        icon: "🤖",
        name: "Transformers",
        description: "Advanced AI Models",
    },
    Technology {
        icon: "🔥",
        name: "PyTorch",
        description: "Deep Learning Framework",
    },
    Technology {
        icon: "📊",
        name: "TensorFlow",
        description: "Machine Learning Platform",
    },
];

/// Transport options as (title key, body key).
pub const TRANSPORTS: [(&str, &str); 3] = [
    ("transport-airport-title", "transport-airport-body"),
    ("transport-rail-title", "transport-rail-body"),
    ("transport-bus-title", "transport-bus-body"),
];

/// Recommended transportation bullet points (i18n keys).
pub const RECOMMENDED: [&str; 3] = [
    "recommended-cabs",
    "recommended-prepaid",
    "recommended-buses",
];

/// Invited speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speaker {
    pub name: &'static str,
    pub role: &'static str,
    pub affiliation: &'static str,
    pub website: &'static str,
    /// Portrait file name; the card falls back to initials when absent.
    pub image: Option<&'static str>,
}

pub const SPEAKERS: [Speaker; 9] = [
    Speaker {
        name: "Prof. G. Narahari Sastry",
        role: "Professor",
        affiliation: "IIT Hyderabad",
        website: "https://iith.ac.in/bt/gnsastry/",
        image: Some("G._Narahari_Sastry.jpg"),
    },
    Speaker {
        name: "Dr. R. B. Pachori",
        role: "Professor",
        affiliation: "IIT Indore",
        website: "https://people.iiti.ac.in/~pachori/",
        image: Some("rbpachauri.jpg"),
    },
    Speaker {
        name: "Dr. Vineeth N Balasubramanian",
        role: "Professor",
        affiliation: "IIT Hyderabad",
        website: "https://people.iith.ac.in/vineethnb/",
        image: Some("Vineeth_N_Balasubramanian.jpg"),
    },
    Speaker {
        name: "Dr. Subramanyam Murala",
        role: "Associate Professor",
        affiliation: "Trinity Dublin, Ireland",
        website: "https://www.scss.tcd.ie/~muralas/",
        image: Some("murala.png"),
    },
    Speaker {
        name: "Dr. Shiv Ram Dubey",
        role: "Assistant Professor",
        affiliation: "IIIT Allahabad",
        website: "https://it.iiita.ac.in/?pg=facultypage&uid=srdubey",
        image: Some("srdubey.jpg"),
    },
    Speaker {
        name: "Dhiraj Madaan",
        role: "Scientist",
        affiliation: "IBM Research",
        website: "https://research.ibm.com/people/dhiraj-madan",
        image: Some("dhiraj madan.jpg"),
    },
    Speaker {
        name: "Om Ashish Mishra",
        role: "Data Scientist",
        affiliation: "Deloitte Hyderabad",
        website: "https://www.omashish.com/",
        image: Some("omashish.jpg"),
    },
    Speaker {
        name: "Dr. Arnab Bhattacharya",
        role: "Professor",
        affiliation: "IIT Kanpur",
        website: "https://iitk.ac.in/new/arnab-bhattacharya",
        image: Some("arnab6.jpg"),
    },
    Speaker {
        name: "Dr. Debdoot Sheet",
        role: "Assistant Professor",
        affiliation: "IIT Kharagpur",
        website: "http://www.facweb.iitkgp.ac.in/~debdoot/",
        image: Some("Debdoot.jpg"),
    },
];

/// Event coordinator shown in the footer and the directions section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub name: &'static str,
    pub email: &'static str,
    pub profile: &'static str,
    pub image: &'static str,
}

impl Contact {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const COORDINATOR: Contact = Contact {
    name: "Dr. Dipti Mishra",
    email: "dipti.mishra@mahindrauniversity.edu.in",
    profile: "https://www.mahindrauniversity.edu.in/faculty/dipti-mishra/",
    image: "dipti 1.png",
};

/// Quick links in the footer.
pub const FOOTER_LINKS: [Section; 3] = [Section::About, Section::Topics, Section::Speakers];

/// Placeholder initials for a speaker without a portrait.
///
/// Words of one character and the "Dr." / "Prof." titles are skipped; the
/// first letters of the next two words are kept, uppercased.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter(|part| part.chars().count() > 1 && *part != "Dr." && *part != "Prof.")
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_skip_titles_and_single_letters() {
        assert_eq!(initials("Dr. Debdoot Sheet"), "DS");
        assert_eq!(initials("Prof. G. Narahari Sastry"), "GN");
        assert_eq!(initials("Dr. Vineeth N Balasubramanian"), "VB");
        assert_eq!(initials("Om Ashish Mishra"), "OA");
    }

    #[test]
    fn initials_of_degenerate_names() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("Dr."), "");
        assert_eq!(initials("ada"), "A");
    }

    #[test]
    fn anchors_are_unique_and_ordered() {
        let anchors: Vec<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            ["about", "topics", "speakers", "directions", "footer"]
        );
    }

    #[test]
    fn roster_has_nine_speakers_with_portraits() {
        assert_eq!(SPEAKERS.len(), 9);
        assert!(SPEAKERS.iter().all(|speaker| speaker.image.is_some()));
    }

    #[test]
    fn coordinator_mailto_is_built_from_email() {
        assert_eq!(
            COORDINATOR.mailto(),
            "mailto:dipti.mishra@mahindrauniversity.edu.in"
        );
    }
}
