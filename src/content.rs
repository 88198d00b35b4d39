//! Static strategy content shown on each dashboard tab

use crate::app::Tab;

#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub name: &'static str,
    pub countries: &'static [&'static str],
    pub focus: &'static str,
}

pub const REGIONS: [Region; 3] = [
    Region {
        name: "South Asia",
        countries: &["India", "Bangladesh", "Nepal"],
        focus: "Academic excellence, career opportunities, and affordable education",
    },
    Region {
        name: "Africa",
        countries: &["Egypt", "Ghana", "Kenya", "Nigeria", "Libya"],
        focus: "Industry partnerships, scholarships, and post-study opportunities",
    },
    Region {
        name: "Europe",
        countries: &["Austria", "Switzerland"],
        focus: "Research opportunities and specialized programs",
    },
];

/// Campaign length in days, split into the two timeline phases.
pub const CAMPAIGN_DAYS: u16 = 15;
pub const PHASE_ONE_DAYS: u16 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Bullets(Vec<String>),
    Paragraph(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSection {
    pub heading: String,
    /// Rendered as a region-style card with an accent colour
    pub accent: bool,
    pub body: Vec<Body>,
}

impl ContentSection {
    fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            accent: false,
            body: Vec::new(),
        }
    }

    fn accent(mut self) -> Self {
        self.accent = true;
        self
    }

    fn bullets<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body
            .push(Body::Bullets(items.into_iter().map(Into::into).collect()));
        self
    }

    fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.body.push(Body::Paragraph(text.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabContent {
    pub title: &'static str,
    pub sections: Vec<ContentSection>,
}

/// Look up the content block for a tab.
pub fn for_tab(tab: Tab) -> TabContent {
    match tab {
        Tab::Overview => overview(),
        Tab::Audience => audience(),
        Tab::Campaign => campaign(),
        Tab::Regions => regions(),
        Tab::Timeline => timeline(),
    }
}

fn overview() -> TabContent {
    TabContent {
        title: "Campaign Overview",
        sections: vec![
            ContentSection::new("Campaign Objectives").bullets([
                "Increase international student enrollment from targeted regions: South Asia, Africa, and Europe",
                "Build brand awareness in 10 key countries across three regions",
                "Generate qualified leads through region-specific social media campaigns",
                "Establish University of Bolton as a preferred UK study destination",
            ]),
            ContentSection::new("Budget Allocation").bullets([
                "Daily budget: $20 per region",
                "Campaign duration: 15 days initial test phase",
                "Total investment: $600",
            ]),
        ],
    }
}

fn audience() -> TabContent {
    // Built only from the region table; there is no separate audience copy.
    let country_count: usize = REGIONS.iter().map(|r| r.countries.len()).sum();
    TabContent {
        title: "Target Audience",
        sections: vec![ContentSection::new("Target Markets")
            .paragraph(format!("{country_count} countries across {} regions", REGIONS.len()))
            .bullets(
                REGIONS
                    .iter()
                    .map(|r| format!("{}: {}", r.name, r.countries.join(", "))),
            )],
    }
}

fn campaign() -> TabContent {
    TabContent {
        title: "Campaign Structure",
        sections: vec![
            ContentSection::new("Regional Ad Variations"),
            ContentSection::new("South Asia Campaign").accent().bullets([
                "Focus on academic excellence and career prospects",
                "Highlight affordable education compared to other UK universities",
                "Showcase successful alumni from the region",
            ]),
            ContentSection::new("Africa Campaign").accent().bullets([
                "Emphasize industry partnerships and job placement rates",
                "Feature scholarship opportunities and student support",
                "Highlight success stories from African graduates",
            ]),
            ContentSection::new("Europe Campaign").accent().bullets([
                "Focus on research opportunities and specialized programs",
                "Highlight cultural exchange and international environment",
                "Showcase facility excellence and innovation",
            ]),
        ],
    }
}

fn regions() -> TabContent {
    TabContent {
        title: "Regional Strategy",
        sections: REGIONS
            .iter()
            .map(|region| {
                ContentSection::new(region.name)
                    .accent()
                    .paragraph("Target Countries")
                    .bullets(region.countries.iter().copied())
                    .paragraph(format!("Strategic Focus: {}", region.focus))
            })
            .collect(),
    }
}

fn timeline() -> TabContent {
    TabContent {
        title: "Campaign Timeline",
        sections: vec![
            ContentSection::new(format!("Phase 1: Days 1-{PHASE_ONE_DAYS}")).bullets([
                "Launch region-specific campaigns in all target countries",
                "Monitor initial performance metrics by country",
                "Track engagement rates across different regions",
                "Analyze cost variations between markets",
            ]),
            ContentSection::new(format!(
                "Phase 2: Days {}-{CAMPAIGN_DAYS}",
                PHASE_ONE_DAYS + 1
            ))
            .bullets([
                "Scale successful variations by region",
                "Optimize targeting based on Week 1 data",
                "Adjust messaging for underperforming markets",
                "Prepare region-specific expansion plans",
            ]),
        ],
    }
}
