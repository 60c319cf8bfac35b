//! Static reference content for the per-sport pages.

/// A dated milestone in a sport's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A titled paragraph, used for facts, rules and process steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fact {
    pub title: &'static str,
    pub body: &'static str,
}

/// A named list of events contested in the sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventGroup {
    pub title: &'static str,
    pub events: &'static [&'static str],
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SportClass {
    pub code: &'static str,
    pub description: &'static str,
    pub equipment: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sport {
    /// URL segment, also the sport tag on articles.
    pub slug: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub hero_image: &'static str,
    pub timeline_subtitle: &'static str,
    pub timeline: &'static [TimelineEvent],
    pub key_facts: &'static [Fact],
    pub equipment_intro: &'static str,
    pub equipment: &'static [&'static str],
    pub competitions: &'static [Fact],
    pub rules: &'static [Fact],
    pub event_groups: &'static [EventGroup],
    pub classification_intro: &'static str,
    pub classes: &'static [SportClass],
    pub classification_steps: &'static [Fact],
    pub adaptations_intro: &'static str,
    pub adaptations: &'static [Fact],
}

pub const PARA_CYCLING: Sport = Sport {
    slug: "para-cycling",
    name: "Para Cycling",
    summary: "Para cycling includes road and track events for athletes with physical impairments using bicycles, tricycles, handcycles, and tandems.",
    hero_image: "/abstract-geometric-shapes.png",
    timeline_subtitle: "Explore the evolution of para cycling from its Paralympic debut to becoming a technologically advanced sport.",
    timeline: &[
        TimelineEvent {
            year: "1984",
            title: "Paralympic Debut",
            description: "Cycling for athletes with disabilities made its first appearance at the New York/Stoke Mandeville Paralympic Games.",
        },
        TimelineEvent {
            year: "1988",
            title: "Seoul Expansion",
            description: "The Seoul Paralympics featured expanded cycling events for athletes with visual impairments and cerebral palsy.",
        },
        TimelineEvent {
            year: "1992",
            title: "Track Cycling Introduction",
            description: "Track cycling was introduced to the Paralympic program at the Barcelona Games.",
        },
        TimelineEvent {
            year: "1996",
            title: "Handcycling Demonstration",
            description: "Handcycling was featured as a demonstration event at the Atlanta Paralympics.",
        },
        TimelineEvent {
            year: "2002",
            title: "UCI Integration",
            description: "Para cycling governance was transferred to the Union Cycliste Internationale (UCI), integrating with mainstream cycling.",
        },
        TimelineEvent {
            year: "2004",
            title: "Handcycling Medal Sport",
            description: "Handcycling became a full medal sport at the Athens Paralympic Games.",
        },
        TimelineEvent {
            year: "2007",
            title: "First UCI World Championships",
            description: "The first UCI Para Cycling World Championships were held in Bordeaux, France.",
        },
        TimelineEvent {
            year: "2016",
            title: "Rio Innovation",
            description: "The Rio Paralympics featured technological innovations in adaptive bikes and increased media coverage of para cycling events.",
        },
    ],
    key_facts: &[
        Fact {
            title: "Event Types",
            body: "Road cycling, track cycling, time trials",
        },
        Fact {
            title: "Competition Format",
            body: "Individual and team events with various distances",
        },
        Fact {
            title: "Paralympic Sport Since",
            body: "1984 New York/Stoke Mandeville Paralympics",
        },
        Fact {
            title: "Governing Body",
            body: "Union Cycliste Internationale (UCI)",
        },
    ],
    equipment_intro: "Para cycling utilizes specialized equipment adapted for different impairments:",
    equipment: &[
        "Standard bicycles for athletes with limb impairments",
        "Handcycles for athletes with lower limb impairments",
        "Tricycles for athletes with coordination impairments",
        "Tandems for athletes with visual impairments",
        "Prosthetic attachments and adaptive equipment",
    ],
    competitions: &[
        Fact {
            title: "Paralympic Games",
            body: "The pinnacle of para cycling competition, featuring road and track events every four years.",
        },
        Fact {
            title: "UCI World Championships",
            body: "Annual world championships organized by UCI featuring the top para cyclists globally.",
        },
        Fact {
            title: "World Cup Series",
            body: "International series of competitions providing qualification opportunities for major events.",
        },
    ],
    rules: &[
        Fact {
            title: "Equipment Standards",
            body: "All cycling equipment must meet UCI technical regulations with specific adaptations for para cycling. Equipment modifications must be approved and cannot provide unfair advantage.",
        },
        Fact {
            title: "Race Procedures",
            body: "Races follow standard UCI procedures with adaptations for different classifications. Starting procedures may vary based on athlete needs and equipment type.",
        },
        Fact {
            title: "Safety Requirements",
            body: "Mandatory helmet use, proper equipment maintenance, and classification-specific safety measures ensure athlete protection during competition.",
        },
        Fact {
            title: "Pilot Requirements",
            body: "For tandem events, pilots must meet specific criteria and cannot have competed as able-bodied cyclists at international level within a specified timeframe.",
        },
    ],
    event_groups: &[
        EventGroup {
            title: "Track Events",
            events: &[
                "Individual pursuit races over 3km or 4km distances",
                "Time trials over 500m, 1km, or longer distances",
                "Scratch races and points races for specific classifications",
                "Team sprint events for tandem classifications",
            ],
        },
        EventGroup {
            title: "Road Events",
            events: &[
                "Individual time trials over various distances",
                "Road races with mass start format",
                "Team relay events combining different classifications",
                "Mixed team relay with male and female athletes",
            ],
        },
    ],
    classification_intro: "Para cycling uses a functional classification system that groups athletes based on their ability to cycle, ensuring fair competition across different impairment types.",
    classes: &[
        SportClass {
            code: "B (Tandem)",
            description: "Visual impairment",
            equipment: "Tandem bicycle with pilot",
        },
        SportClass {
            code: "C1-C5",
            description: "Cycling with physical impairments",
            equipment: "Standard bicycle with adaptations",
        },
        SportClass {
            code: "H1-H5",
            description: "Handcycling classifications",
            equipment: "Handcycle (arm-powered)",
        },
        SportClass {
            code: "T1-T2",
            description: "Tricycle for coordination impairments",
            equipment: "Three-wheeled bicycle",
        },
    ],
    classification_steps: &[
        Fact {
            title: "Medical Assessment",
            body: "Review of medical documentation and physical examination",
        },
        Fact {
            title: "Technical Assessment",
            body: "Cycling-specific tests to evaluate functional ability",
        },
        Fact {
            title: "Observation in Competition",
            body: "Assessment during actual cycling competition",
        },
        Fact {
            title: "Classification Assignment",
            body: "Final sport class assigned based on all evaluations",
        },
    ],
    adaptations_intro: "Para cycling allows various equipment adaptations to enable participation:",
    adaptations: &[
        Fact {
            title: "Prosthetic Attachments",
            body: "Custom prosthetic limbs and attachments for pedaling and steering",
        },
        Fact {
            title: "Bike Modifications",
            body: "Adapted handlebars, seats, and pedal systems for different impairments",
        },
        Fact {
            title: "Safety Equipment",
            body: "Specialized helmets, strapping systems, and protective gear",
        },
    ],
};

pub const WHEELCHAIR_BASKETBALL: Sport = Sport {
    slug: "wheelchair-basketball",
    name: "Wheelchair Basketball",
    summary: "Fast, physical and tactical: wheelchair basketball is played by athletes with lower limb impairments on a standard court with standard hoops.",
    hero_image: "/wheelchair-basketball-action.png",
    timeline_subtitle: "From rehabilitation hospitals to one of the most watched sports at the Paralympic Games.",
    timeline: &[
        TimelineEvent {
            year: "1946",
            title: "First Games",
            description: "Wheelchair basketball is first played by injured veterans in the United States.",
        },
        TimelineEvent {
            year: "1960",
            title: "Paralympic Debut",
            description: "Men's wheelchair basketball is part of the first Paralympic Games in Rome.",
        },
        TimelineEvent {
            year: "1968",
            title: "Women's Tournament",
            description: "Women's wheelchair basketball joins the Paralympic program in Tel Aviv.",
        },
        TimelineEvent {
            year: "1993",
            title: "IWBF Independence",
            description: "The International Wheelchair Basketball Federation becomes the sport's autonomous governing body.",
        },
    ],
    key_facts: &[
        Fact {
            title: "Team Size",
            body: "Five players per side on court",
        },
        Fact {
            title: "Paralympic Sport Since",
            body: "1960 Rome Paralympics",
        },
        Fact {
            title: "Governing Body",
            body: "International Wheelchair Basketball Federation (IWBF)",
        },
    ],
    equipment_intro: "Players compete in sport-specific wheelchairs built for speed and stability:",
    equipment: &[
        "Cambered wheels for quick turns",
        "Anti-tip casters at the rear of the chair",
        "Strapping to secure the player in the seat",
    ],
    competitions: &[
        Fact {
            title: "Paralympic Games",
            body: "Men's and women's tournaments held every four years.",
        },
        Fact {
            title: "IWBF World Championships",
            body: "World championships held between Paralympic Games.",
        },
    ],
    rules: &[
        Fact {
            title: "Dribbling",
            body: "A player may push the wheels twice before bouncing, passing or shooting the ball.",
        },
        Fact {
            title: "Point Limit",
            body: "The five players on court may not exceed a combined 14 classification points.",
        },
    ],
    event_groups: &[],
    classification_intro: "Each player is assigned a point value reflecting their functional ability, and teams are limited in the total points on court.",
    classes: &[
        SportClass {
            code: "1.0-2.5",
            description: "Limited trunk control and stability",
            equipment: "Higher backrest and strapping",
        },
        SportClass {
            code: "3.0-4.5",
            description: "Greater trunk movement and stability",
            equipment: "Standard sport wheelchair",
        },
    ],
    classification_steps: &[],
    adaptations_intro: "",
    adaptations: &[],
};

pub const PARA_SWIMMING: Sport = Sport {
    slug: "para-swimming",
    name: "Para Swimming",
    summary: "Para swimming is open to athletes with physical, visual and intellectual impairments, racing across freestyle, backstroke, breaststroke, butterfly and medley.",
    hero_image: "/para-swimming-competition.png",
    timeline_subtitle: "One of the original Paralympic sports.",
    timeline: &[
        TimelineEvent {
            year: "1960",
            title: "Paralympic Debut",
            description: "Swimming is one of the sports contested at the first Paralympic Games in Rome.",
        },
        TimelineEvent {
            year: "2017",
            title: "World Para Swimming",
            description: "The sport is renamed World Para Swimming under the International Paralympic Committee.",
        },
    ],
    key_facts: &[
        Fact {
            title: "Strokes",
            body: "Freestyle, backstroke, breaststroke, butterfly, individual medley",
        },
        Fact {
            title: "Paralympic Sport Since",
            body: "1960 Rome Paralympics",
        },
        Fact {
            title: "Governing Body",
            body: "World Para Swimming",
        },
    ],
    equipment_intro: "",
    equipment: &[],
    competitions: &[
        Fact {
            title: "Paralympic Games",
            body: "The largest para swimming program, held every four years.",
        },
        Fact {
            title: "World Series",
            body: "An annual international circuit with legs across several continents.",
        },
    ],
    rules: &[Fact {
        title: "Tappers",
        body: "Swimmers with visual impairments may be signalled by a tapper as they approach the wall.",
    }],
    event_groups: &[],
    classification_intro: "Sport classes combine a stroke prefix with a number, where lower numbers indicate more severe activity limitation.",
    classes: &[
        SportClass {
            code: "S1-S10",
            description: "Physical impairment",
            equipment: "None",
        },
        SportClass {
            code: "S11-S13",
            description: "Visual impairment",
            equipment: "Blacked-out goggles for S11",
        },
        SportClass {
            code: "S14",
            description: "Intellectual impairment",
            equipment: "None",
        },
    ],
    classification_steps: &[],
    adaptations_intro: "",
    adaptations: &[],
};

/// Every sport with a reference page, in menu order.
pub const SPORTS: &[Sport] = &[PARA_CYCLING, WHEELCHAIR_BASKETBALL, PARA_SWIMMING];

/// Look up a sport by its URL segment.
#[must_use]
pub fn find_sport(slug: &str) -> Option<&'static Sport> {
    SPORTS.iter().find(|s| s.slug.eq_ignore_ascii_case(slug.trim()))
}
