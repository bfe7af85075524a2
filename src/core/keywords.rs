use crate::models::EmploymentStatus;

/// Sector keyword list shared by both agriculture category spellings.
const AGRICULTURE_KEYWORDS: &[&str] = &[
    "agriculture",
    "farming",
    "farmer",
    "crop",
    "irrigation",
    "soil",
    "seed",
    "fertilizer",
    "organic",
    "livestock",
    "dairy",
    "fisheries",
    "horticulture",
    "rural",
    "agricultural",
    "farm",
    "cultivation",
    "harvest",
    "precision farming",
    "climate resilient",
];

/// Keyword list for a scheme category, used by the sector relevance rule.
/// Entries are matched verbatim against lowercased scheme text.
pub fn sector_keywords(category: &str) -> &'static [&'static str] {
    match category {
        "Digital India" => &[
            "digital",
            "technology",
            "online",
            "internet",
            "e-governance",
            "cyber",
            "IT",
            "software",
            "tech",
            "innovation",
            "startup",
            "digital literacy",
            "broadband",
            "connectivity",
            "electronic",
            "computer",
            "mobile",
            "app",
            "website",
            "artificial intelligence",
            "AI",
            "data",
            "cloud",
        ],
        "Agriculture" | "Agriculture & Farming" => AGRICULTURE_KEYWORDS,
        "Entrepreneurship" => &[
            "business",
            "startup",
            "entrepreneur",
            "MSME",
            "loan",
            "credit",
            "enterprise",
            "self-employed",
            "trade",
            "commerce",
            "industry",
            "innovation",
            "incubation",
            "venture",
            "business development",
            "funding",
            "investment",
            "market access",
        ],
        "Education" => &[
            "education",
            "student",
            "scholarship",
            "school",
            "college",
            "university",
            "research",
            "academic",
            "learning",
            "training",
            "skill",
            "degree",
            "diploma",
            "study",
            "educational",
            "digital education",
            "vocational",
        ],
        "Health" => &[
            "health",
            "medical",
            "hospital",
            "treatment",
            "insurance",
            "medicine",
            "healthcare",
            "wellness",
            "nutrition",
            "maternal",
            "child",
            "vaccination",
            "clinic",
            "Ayushman",
            "medical care",
        ],
        "Housing" => &[
            "housing",
            "home",
            "construction",
            "shelter",
            "accommodation",
            "property",
            "residential",
            "urban",
            "rural housing",
            "slum",
            "affordable housing",
            "house",
            "PMAY",
        ],
        "Employment" => &[
            "employment",
            "job",
            "work",
            "career",
            "unemployment",
            "placement",
            "training",
            "apprenticeship",
            "internship",
            "vocational",
            "job creation",
            "skill development",
        ],
        "Social Welfare" => &[
            "welfare",
            "pension",
            "disability",
            "elderly",
            "women",
            "child",
            "widow",
            "minority",
            "tribal",
            "SC",
            "ST",
            "OBC",
            "BPL",
            "social security",
            "empowerment",
        ],
        "Skill Development" => &[
            "skill",
            "training",
            "development",
            "capacity building",
            "vocational",
            "technical",
            "professional",
            "certification",
            "upskilling",
            "reskilling",
            "PMKVY",
        ],
        "Finance" => &[
            "finance",
            "loan",
            "credit",
            "banking",
            "insurance",
            "investment",
            "subsidy",
            "grant",
            "financial assistance",
            "micro credit",
            "financial",
            "MUDRA",
            "Jan Dhan",
        ],
        _ => &[],
    }
}

/// Scheme categories considered a direct fit for an occupation. Lookup is
/// by the full lowercased occupation string.
pub fn occupation_categories(occupation: &str) -> &'static [&'static str] {
    match occupation {
        "farmer" => &["Agriculture", "Agriculture & Farming"],
        "student" => &["Education", "Skill Development"],
        "entrepreneur" => &["Entrepreneurship", "Digital India"],
        "teacher" => &["Education", "Skill Development"],
        "software engineer" => &["Digital India", "Entrepreneurship"],
        "doctor" => &["Health", "Education"],
        "unemployed" => &["Employment", "Skill Development", "Entrepreneurship"],
        "self-employed" => &["Entrepreneurship", "Finance"],
        "business owner" => &["Entrepreneurship", "Finance", "Digital India"],
        _ => &[],
    }
}

/// Keywords tested against scheme text for each employment status.
pub fn employment_keywords(status: EmploymentStatus) -> &'static [&'static str] {
    match status {
        EmploymentStatus::Unemployed => &[
            "unemployment",
            "employment generation",
            "job creation",
            "employment",
            "PMEGP",
        ],
        EmploymentStatus::SelfEmployed => {
            &["self-employed", "entrepreneur", "business", "MSME", "MUDRA"]
        }
        EmploymentStatus::Student => &[
            "student",
            "education",
            "scholarship",
            "academic",
            "skill development",
        ],
        EmploymentStatus::Employed => &[
            "skill development",
            "training",
            "professional development",
            "upskilling",
        ],
        EmploymentStatus::Retired => {
            &["pension", "senior citizen", "elderly", "social security"]
        }
    }
}
