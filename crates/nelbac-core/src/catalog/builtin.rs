//! Built-in brand catalog.

use std::collections::BTreeMap;

use super::models::{CompanyInfo, CompanyStat, Product, VisionItem};
use super::Catalog;

fn specs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn vision(
    title: &str,
    subtitle: &str,
    body: &str,
    image: &str,
    icon: &str,
    short_label: &str,
) -> VisionItem {
    VisionItem {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        body: body.to_string(),
        image: image.to_string(),
        icon: icon.to_string(),
        short_label: short_label.to_string(),
    }
}

pub fn catalog() -> Catalog {
    Catalog {
        products: vec![
            Product {
                id: "nbgatv3-2".to_string(),
                name: "NBGATV3.2".to_string(),
                tagline: "Two Zone Irrigation Controller".to_string(),
                description: "Two Zone irrigation controller with one solenoid valve. \
                    Perfect for residential gardens, lawns, rooftop gardens, and light \
                    commercial applications."
                    .to_string(),
                price: 149.0,
                image: "2zone-cover.jpg".to_string(),
                category: "Controller".to_string(),
                features: vec![
                    "2 Station Models - Perfect for residential".to_string(),
                    "Supports 2 valves and/or water pump".to_string(),
                    "Memory saves program during power outages".to_string(),
                    "Flexible Manual Operation".to_string(),
                ],
                specs: specs(&[
                    ("Zones", "2 Stations"),
                    ("Applications", "Residential & Light Commercial"),
                    ("Environment", "Indoor/Outdoor"),
                    ("Water Source", "Pump & Tank Support"),
                ]),
            },
            Product {
                id: "nbgatv3-4".to_string(),
                name: "NBGATV3.4".to_string(),
                tagline: "Four Zone Irrigation Controller".to_string(),
                description: "Four Zone irrigation controller with one solenoid valve. \
                    Different duration can be set for each zone based on plant type, \
                    emitters, water pressure, and flow rate."
                    .to_string(),
                price: 199.0,
                image: "4zone-cover.jpg".to_string(),
                category: "Controller".to_string(),
                features: vec![
                    "4 Station Models - Perfect for residential".to_string(),
                    "Supports 4 valves and/or water pump".to_string(),
                    "Individual zone duration settings".to_string(),
                    "Memory saves program during power outages".to_string(),
                ],
                specs: specs(&[
                    ("Zones", "4 Stations"),
                    ("Applications", "Residential, Hydroponics, Aquaponics"),
                    ("Environment", "Indoor/Outdoor"),
                    ("Water Source", "Pump & Tank Support"),
                ]),
            },
            Product {
                id: "nbgatv3-6".to_string(),
                name: "NBGATV3.6".to_string(),
                tagline: "Six Zone Irrigation Controller".to_string(),
                description: "Six Zone irrigation controller with one solenoid valve. \
                    Ideal for small/marginal farms with individual duration settings \
                    per zone."
                    .to_string(),
                price: 249.0,
                image: "6zone-cover.jpg".to_string(),
                category: "Controller".to_string(),
                features: vec![
                    "6 Station Models - Perfect for farms".to_string(),
                    "Supports 6 valves and/or water pump".to_string(),
                    "Individual zone duration settings".to_string(),
                    "Memory saves program during power outages".to_string(),
                ],
                specs: specs(&[
                    ("Zones", "6 Stations"),
                    ("Applications", "Farms, Hydroponics, Aquaponics"),
                    ("Environment", "Indoor/Outdoor"),
                    ("Water Source", "Pump & Tank Support"),
                ]),
            },
        ],
        vision: vec![
            vision(
                "Get productive.",
                "Simplify labour.",
                "Experience the power of automation in your daily life. Reduce the need \
                 for manual intervention and reallocate labour to more strategic tasks.",
                "productive.jpg",
                "digging",
                "Productive",
            ),
            vision(
                "Always reliable.",
                "Consistent performance.",
                "Once set. All set. Power failure recovery automatically resumes \
                 operation after an outage, ensuring uninterrupted watering schedules.",
                "reliable.jpg",
                "shield",
                "Reliable",
            ),
            vision(
                "Stay efficient.",
                "Control your yield.",
                "Multi-zone control, programmable schedules, and condition-based \
                 adjustments regulate pressure and flow precisely.",
                "efficient.jpg",
                "droplet",
                "Efficient",
            ),
            vision(
                "Be on the go.",
                "Stay connected.",
                "Remote monitoring and control empowers proactive decision-making with \
                 instant insight into device status from anywhere.",
                "connected.jpg",
                "cloud",
                "Connected",
            ),
            vision(
                "Resource Efficient.",
                "Conserve life.",
                "Prevent over or under watering with precise scheduling and zone-based \
                 optimal distribution. Protect resources while maintaining lush \
                 environments.",
                "conserve.jpg",
                "leaf",
                "Conserve",
            ),
            vision(
                "Analyse data.",
                "Unlock precision.",
                "Harness data analytics for smarter irrigation: better crop health, \
                 increased yields, and improved quality of produce.",
                "analytics.jpg",
                "chart",
                "Analytics",
            ),
            vision(
                "Be flexible.",
                "Automate anywhere.",
                "Compatible with all standard valves, AC or DC, 12V or 24V. Scale \
                 without technical debt.",
                "flexible.jpg",
                "layers",
                "Flexible",
            ),
        ],
        company: CompanyInfo {
            name: "Nelbac".to_string(),
            tagline: "Automate Anything.".to_string(),
            founded: "2018".to_string(),
            location: "Bangalore, India".to_string(),
            description: "Nelbac is a Bangalore-based company developing irrigation \
                controllers for landscape designers, homeowners, property owners, and \
                small farms."
                .to_string(),
            mission: "Make farm automation technologies aspirational for small holders \
                to take up agriculture as a business."
                .to_string(),
            stats: vec![
                CompanyStat {
                    value: "2018".to_string(),
                    label: "Founded".to_string(),
                },
                CompanyStat {
                    value: "5+".to_string(),
                    label: "Years Experience".to_string(),
                },
                CompanyStat {
                    value: "1000+".to_string(),
                    label: "Devices Deployed".to_string(),
                },
                CompanyStat {
                    value: "99.9%".to_string(),
                    label: "Uptime".to_string(),
                },
            ],
        },
    }
}
