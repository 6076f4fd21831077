//! Seed data loaded into the in-memory stores at startup.
//!
//! There is no persistence; a restart resets every store to exactly this
//! state. `itm003` ships already borrowed so the not-available path is
//! reachable out of the box.

use crate::types::dto::items::Item;
use crate::types::dto::map::MapItem;
use crate::types::dto::requests::{BorrowRequest, RequestStatus};
use crate::types::dto::trust::TrustScore;

/// The six-item starter catalog
pub fn items() -> Vec<Item> {
    vec![
        Item {
            id: "itm001".to_string(),
            name: "Cordless Drill".to_string(),
            description: "18V cordless drill, lightly used.".to_string(),
            category: "Tools".to_string(),
            owner: "Alice Johnson".to_string(),
            condition: "Good".to_string(),
            available: true,
            image: "https://plus.unsplash.com/premium_photo-1663076086194-5c16ee5ff183?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxzZWFyY2h8OXx8cG93ZXIlMjBkcmlsbHxlbnwwfHwwfHx8MA%3D%3D".to_string(),
            borrowed_by: None,
        },
        Item {
            id: "itm002".to_string(),
            name: "Camping Tent".to_string(),
            description: "4-person waterproof tent, easy setup.".to_string(),
            category: "Outdoors".to_string(),
            owner: "Brian Lee".to_string(),
            condition: "Excellent".to_string(),
            available: true,
            image: "https://images.unsplash.com/photo-1504280390367-361c6d9f38f4?w=400&h=300&fit=crop".to_string(),
            borrowed_by: None,
        },
        Item {
            id: "itm003".to_string(),
            name: "Crock Pot".to_string(),
            description: "Large 6-quart slow cooker, works great.".to_string(),
            category: "Kitchen".to_string(),
            owner: "Samantha Green".to_string(),
            condition: "Very Good".to_string(),
            available: false,
            image: "https://images.unsplash.com/photo-1574484284002-952d92456975?w=400&h=300&fit=crop".to_string(),
            borrowed_by: Some("Prachi Patel".to_string()),
        },
        Item {
            id: "itm004".to_string(),
            name: "Yoga Mat".to_string(),
            description: "Non-slip yoga mat, 6mm thick, blue color.".to_string(),
            category: "Fitness".to_string(),
            owner: "Ravi Mehra".to_string(),
            condition: "Good".to_string(),
            available: true,
            image: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=400&h=300&fit=crop".to_string(),
            borrowed_by: None,
        },
        Item {
            id: "itm005".to_string(),
            name: "Ladder".to_string(),
            description: "6-foot aluminum step ladder, sturdy.".to_string(),
            category: "Tools".to_string(),
            owner: "Dana Wang".to_string(),
            condition: "Good".to_string(),
            available: true,
            image: "https://images.unsplash.com/photo-1586953208448-b95a79798f07?w=400&h=300&fit=crop".to_string(),
            borrowed_by: None,
        },
        Item {
            id: "itm006".to_string(),
            name: "Board Game: Settlers of Catan".to_string(),
            description: "Complete set, all pieces included.".to_string(),
            category: "Games".to_string(),
            owner: "Luis García".to_string(),
            condition: "Like New".to_string(),
            available: true,
            image: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=400&h=300&fit=crop".to_string(),
            borrowed_by: None,
        },
    ]
}

/// Sample borrow requests; display-only, never transitioned by the API
pub fn requests() -> Vec<BorrowRequest> {
    vec![
        BorrowRequest {
            id: "req001".to_string(),
            item_id: "itm001".to_string(),
            item_name: "Cordless Drill".to_string(),
            status: RequestStatus::Pending,
            request_date: "2024-01-15".to_string(),
            user_id: "usr456".to_string(),
            user_name: "John Smith".to_string(),
        },
        BorrowRequest {
            id: "req002".to_string(),
            item_id: "itm003".to_string(),
            item_name: "Crock Pot".to_string(),
            status: RequestStatus::Approved,
            request_date: "2024-01-10".to_string(),
            user_id: "usr789".to_string(),
            user_name: "Prachi Patel".to_string(),
        },
        BorrowRequest {
            id: "req003".to_string(),
            item_id: "itm002".to_string(),
            item_name: "Camping Tent".to_string(),
            status: RequestStatus::Returned,
            request_date: "2024-01-05".to_string(),
            user_id: "usr123".to_string(),
            user_name: "Alice Johnson".to_string(),
        },
    ]
}

/// One map location per seed item
pub fn map_items() -> Vec<MapItem> {
    vec![
        MapItem {
            item_id: "itm001".to_string(),
            lat: 28.4595,
            lng: 77.0266,
            address: "Block A, Sector 45".to_string(),
            name: "Cordless Drill".to_string(),
            category: "Tools".to_string(),
        },
        MapItem {
            item_id: "itm002".to_string(),
            lat: 28.4652,
            lng: 77.0565,
            address: "Block B, Sector 50".to_string(),
            name: "Camping Tent".to_string(),
            category: "Outdoors".to_string(),
        },
        MapItem {
            item_id: "itm003".to_string(),
            lat: 28.4612,
            lng: 77.0316,
            address: "Block C, Sector 47".to_string(),
            name: "Crock Pot".to_string(),
            category: "Kitchen".to_string(),
        },
        MapItem {
            item_id: "itm004".to_string(),
            lat: 28.4672,
            lng: 77.0415,
            address: "Block D, Sector 52".to_string(),
            name: "Yoga Mat".to_string(),
            category: "Fitness".to_string(),
        },
        MapItem {
            item_id: "itm005".to_string(),
            lat: 28.4632,
            lng: 77.0365,
            address: "Block E, Sector 48".to_string(),
            name: "Ladder".to_string(),
            category: "Tools".to_string(),
        },
        MapItem {
            item_id: "itm006".to_string(),
            lat: 28.4692,
            lng: 77.0465,
            address: "Block F, Sector 54".to_string(),
            name: "Board Game: Settlers of Catan".to_string(),
            category: "Games".to_string(),
        },
    ]
}

/// Known trust score records
pub fn trust_scores() -> Vec<TrustScore> {
    vec![TrustScore {
        user_id: "usr123".to_string(),
        name: "Alice Johnson".to_string(),
        trust_score: 9.5,
        lending_count: 7,
        borrowing_count: 2,
        positive_feedback: 97,
    }]
}
