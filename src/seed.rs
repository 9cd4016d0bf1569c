// seed.rs
//
// Static marketplace data. Everything here is built once at startup and
// never mutated; the moderation queue is cloned out of it into app state.

use crate::domain::item::{ItemDetail, Owner};
use crate::domain::listing::{Category, Condition, Listing};
use crate::domain::moderation::{ModerationQueue, Report, Status, Submission};

/// Registered users reported on the admin page.
pub const TOTAL_USERS: u32 = 1247;

pub static LISTINGS: &[Listing] = &[
    Listing {
        id: 1,
        title: "Vintage Denim Jacket",
        image_url: "https://images.unsplash.com/photo-1544022613-e87ca75a784a?w=400",
        condition: Condition::Excellent,
        category: Category::Outerwear,
        points: 75,
        size: "M",
        location: "New York",
    },
    Listing {
        id: 2,
        title: "Designer Summer Dress",
        image_url: "https://images.unsplash.com/photo-1595777457583-95e059d581b8?w=400",
        condition: Condition::LikeNew,
        category: Category::Dresses,
        points: 120,
        size: "S",
        location: "Los Angeles",
    },
    Listing {
        id: 3,
        title: "Classic White Sneakers",
        image_url: "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=400",
        condition: Condition::Good,
        category: Category::Footwear,
        points: 60,
        size: "9",
        location: "Chicago",
    },
    Listing {
        id: 4,
        title: "Cozy Wool Sweater",
        image_url: "https://images.unsplash.com/photo-1434389677669-e08b4cac3105?w=400",
        condition: Condition::Excellent,
        category: Category::Knitwear,
        points: 90,
        size: "L",
        location: "Seattle",
    },
    Listing {
        id: 5,
        title: "Leather Handbag",
        image_url: "https://images.unsplash.com/photo-1548036328-c9fa89d128fa?w=400",
        condition: Condition::VeryGood,
        category: Category::Accessories,
        points: 150,
        size: "One Size",
        location: "Miami",
    },
    Listing {
        id: 6,
        title: "Cotton T-Shirt",
        image_url: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400",
        condition: Condition::Good,
        category: Category::Tops,
        points: 25,
        size: "M",
        location: "Boston",
    },
];

/// Listings shown in the home page carousel.
pub fn featured() -> &'static [Listing] {
    &LISTINGS[..4]
}

pub fn listing(id: u32) -> Option<&'static Listing> {
    LISTINGS.iter().find(|l| l.id == id)
}

/// Full item page data for a catalog listing.
pub fn item_detail(id: u32) -> Option<ItemDetail> {
    let listing = listing(id)?;

    let detail = match id {
        1 => ItemDetail {
            listing,
            description: "Beautiful vintage denim jacket in excellent condition. Classic blue \
                          wash with minimal wear. Perfect for layering and adding a vintage \
                          touch to any outfit. From a smoke-free home.",
            images: &[
                "https://images.unsplash.com/photo-1544022613-e87ca75a784a?w=600",
                "https://images.unsplash.com/photo-1551232864-3f0890e580d9?w=600",
                "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=600",
            ],
            brand: "Vintage",
            tags: &["vintage", "denim", "classic", "unisex"],
            owner: Owner {
                name: "Sarah M.",
                rating: 4.8,
                swaps_completed: 24,
                joined: "2023-06-15",
            },
            is_available: true,
            views: 156,
            likes: 23,
            posted: "2024-01-10",
        },
        2 => ItemDetail {
            listing,
            description: "Flowy floral summer dress, worn once to a wedding. Lined, with a \
                          hidden side zip.",
            images: &[
                "https://images.unsplash.com/photo-1595777457583-95e059d581b8?w=600",
            ],
            brand: "Reformation",
            tags: &["summer", "floral", "designer"],
            owner: Owner {
                name: "Emily Chen",
                rating: 4.9,
                swaps_completed: 31,
                joined: "2023-03-02",
            },
            is_available: true,
            views: 210,
            likes: 41,
            posted: "2024-01-12",
        },
        3 => ItemDetail {
            listing,
            description: "Everyday white leather sneakers. Some creasing on the toe box, \
                          soles in good shape.",
            images: &[
                "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=600",
            ],
            brand: "Common Projects",
            tags: &["sneakers", "minimal"],
            owner: Owner {
                name: "Mike Johnson",
                rating: 4.5,
                swaps_completed: 9,
                joined: "2023-09-21",
            },
            is_available: true,
            views: 88,
            likes: 12,
            posted: "2024-01-08",
        },
        4 => ItemDetail {
            listing,
            description: "Chunky merino wool sweater, hand wash only. No pilling.",
            images: &[
                "https://images.unsplash.com/photo-1434389677669-e08b4cac3105?w=600",
            ],
            brand: "Everlane",
            tags: &["wool", "winter", "cozy"],
            owner: Owner {
                name: "Priya K.",
                rating: 4.7,
                swaps_completed: 15,
                joined: "2023-11-04",
            },
            is_available: true,
            views: 97,
            likes: 19,
            posted: "2024-01-05",
        },
        5 => ItemDetail {
            listing,
            description: "Structured leather handbag with gold hardware. Light scuffing on \
                          the base corners.",
            images: &[
                "https://images.unsplash.com/photo-1548036328-c9fa89d128fa?w=600",
            ],
            brand: "Coach",
            tags: &["leather", "designer"],
            owner: Owner {
                name: "Dana R.",
                rating: 4.6,
                swaps_completed: 12,
                joined: "2023-07-30",
            },
            is_available: false,
            views: 301,
            likes: 58,
            posted: "2023-12-28",
        },
        _ => ItemDetail {
            listing,
            description: "Soft organic cotton crew neck tee.",
            images: &[
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=600",
            ],
            brand: "Uniqlo",
            tags: &["basics", "cotton"],
            owner: Owner {
                name: "Tom B.",
                rating: 4.3,
                swaps_completed: 4,
                joined: "2024-01-01",
            },
            is_available: true,
            views: 45,
            likes: 3,
            posted: "2024-01-14",
        },
    };

    Some(detail)
}

/// An item on the dashboard's "My Items" tab.
#[derive(Debug, Clone)]
pub struct OwnedItem {
    pub title: String,
    pub image_url: String,
    pub status: Status,
    pub views: u32,
    pub likes: u32,
    pub points: Option<u32>,
}

pub fn owned_items() -> Vec<OwnedItem> {
    vec![
        OwnedItem {
            title: "Vintage Band T-Shirt".into(),
            image_url: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=200".into(),
            status: Status::Approved,
            views: 24,
            likes: 5,
            points: Some(45),
        },
        OwnedItem {
            title: "Designer Handbag".into(),
            image_url: "https://images.unsplash.com/photo-1548036328-c9fa89d128fa?w=200".into(),
            status: Status::Pending,
            views: 12,
            likes: 2,
            points: Some(120),
        },
    ]
}

#[derive(Debug, Clone)]
pub struct Swap {
    pub other_user: &'static str,
    pub my_item: &'static str,
    pub their_item: &'static str,
    pub status: &'static str,
    pub date: &'static str,
}

pub static ACTIVE_SWAPS: &[Swap] = &[Swap {
    other_user: "Sarah M.",
    my_item: "Vintage Band T-Shirt",
    their_item: "Denim Jacket",
    status: "Pending",
    date: "2024-01-15",
}];

pub struct Activity {
    pub description: &'static str,
    pub when: &'static str,
}

pub static RECENT_ACTIVITY: &[Activity] = &[
    Activity {
        description: "Completed swap: Vintage T-Shirt → Denim Jacket",
        when: "2 days ago",
    },
    Activity {
        description: "Listed new item: Designer Handbag",
        when: "1 week ago",
    },
    Activity {
        description: "Earned 45 points from successful swap",
        when: "1 week ago",
    },
    Activity {
        description: "Swap request received for Wool Sweater",
        when: "2 weeks ago",
    },
];

pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub earned: bool,
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Eco Warrior",
        description: "Completed 5 swaps",
        earned: true,
    },
    Achievement {
        title: "Community Star",
        description: "Received 50+ positive ratings",
        earned: true,
    },
    Achievement {
        title: "Trendsetter",
        description: "Listed 20+ items",
        earned: false,
    },
    Achievement {
        title: "Swap Master",
        description: "Completed 25 swaps",
        earned: false,
    },
];

pub fn moderation_queue() -> ModerationQueue {
    let submissions = vec![
        Submission {
            id: 1,
            title: "Designer Handbag".into(),
            description: "Authentic designer handbag in excellent condition...".into(),
            category: Category::Accessories,
            condition: Condition::LikeNew,
            size: None,
            brand: None,
            tags: vec![],
            points: Some(120),
            images: vec![
                "https://images.unsplash.com/photo-1548036328-c9fa89d128fa?w=200".into(),
            ],
            submitter: "Emily Chen".into(),
            submitted: "2024-01-15".into(),
            status: Status::Pending,
        },
        Submission {
            id: 2,
            title: "Vintage Concert T-Shirt".into(),
            description: "Rare vintage band t-shirt from 1995 tour...".into(),
            category: Category::Tops,
            condition: Condition::Good,
            size: None,
            brand: None,
            tags: vec![],
            points: Some(45),
            images: vec![
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=200".into(),
            ],
            submitter: "Mike Johnson".into(),
            submitted: "2024-01-14".into(),
            status: Status::Pending,
        },
    ];

    let reports = vec![Report {
        id: 3,
        title: "Questionable Item".into(),
        poster: "Anonymous User".into(),
        reason: "Inappropriate content".into(),
        count: 3,
    }];

    ModerationQueue::new(submissions, reports)
}
