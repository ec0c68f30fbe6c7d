//! Test fixtures: a trimmed-down database with every well-known id present

use crate::ids::*;
use crate::tables::{DatabaseTables, InsuranceConfig};
use serde_json::json;

pub const GENERATOR_AREA: &str = "5d3b396e33c48f02b81cd9f3";
pub const ITEM_ROOT: &str = "54009119af1c881c07000029";
pub const FACTORY_KEY: &str = "5448ba0b4bdc2d02308b456c";
pub const LAB_KEYCARD: &str = "5c94bbff86f7747ee735c08f";
pub const SALEWA: &str = "544fb45d4bdc2dee738b4568";

pub fn sample_tables() -> DatabaseTables {
    let raw = json!({
        "hideout": {
            "areas": [
                {
                    "_id": STASH_AREA,
                    "type": 3,
                    "stages": {
                        "1": {
                            "constructionTime": 0,
                            "requirements": []
                        },
                        "2": {
                            "constructionTime": 8640,
                            "requirements": [
                                {"templateId": ROUBLES, "count": 2_500_000, "type": "Item"},
                                {"loyaltyLevel": 2, "traderId": PRAPOR, "type": "TraderLoyalty"}
                            ]
                        },
                        "3": {
                            "constructionTime": 17280,
                            "requirements": [
                                {"templateId": EUROS, "count": 8_505, "type": "Item"},
                                {"loyaltyLevel": 3, "traderId": PEACEKEEPER, "type": "TraderLoyalty"},
                                {"templateId": GRAPHICS_CARD, "count": 1, "type": "Item"},
                                {"requiredLevel": 2, "areaType": 3, "type": "Area"}
                            ]
                        },
                        "4": {
                            "constructionTime": 25920,
                            "requirements": [
                                {"templateId": ROUBLES, "count": 4_750_001, "type": "Item"},
                                {"loyaltyLevel": 4, "traderId": THERAPIST, "type": "TraderLoyalty"}
                            ]
                        }
                    }
                },
                {
                    "_id": GENERATOR_AREA,
                    "type": 4,
                    "stages": {
                        "1": {"constructionTime": 1800, "requirements": [
                            {"templateId": GRAPHICS_CARD, "count": 2, "type": "Item"}
                        ]},
                        "2": {"constructionTime": 3600.5, "requirements": []}
                    }
                }
            ],
            "production": {
                "recipes": [
                    {"_id": "5d5c205bd582a50d042a3c0e", "endProduct": BITCOIN, "productionTime": 145000, "areaType": 20},
                    {"_id": "5d5589c1f934db045e6c5492", "endProduct": "5d1b376e86f774252519444e", "productionTime": 1800, "areaType": 10}
                ],
                "scavRecipes": [{"_id": "62710974e71632321e5afd5f", "productionTime": 2500}],
                "cultistRecipes": []
            },
            "settings": {"gpuBoostRate": 0.041225, "generatorSpeedWithoutFuel": 0.15}
        },
        "traders": {
            PRAPOR: {
                "base": {
                    "_id": PRAPOR,
                    "nickname": "Prapor",
                    "insurance": {"availability": true, "min_return_hour": 24, "max_return_hour": 36, "max_storage_time": 144},
                    "loyaltyLevels": [
                        {"insurance_price_coef": 16, "minLevel": 1},
                        {"insurance_price_coef": 20, "minLevel": 15},
                        {"insurance_price_coef": 24, "minLevel": 26}
                    ]
                },
                "assort": {"items": [], "barter_scheme": {}, "loyal_level_items": {}}
            },
            THERAPIST: {
                "base": {
                    "_id": THERAPIST,
                    "nickname": "Therapist",
                    "insurance": {"availability": true, "min_return_hour": 12, "max_return_hour": 24, "max_storage_time": 144},
                    "loyaltyLevels": [
                        {"insurance_price_coef": 25, "minLevel": 1},
                        {"insurance_price_coef": 30.5, "minLevel": 13},
                        {"insurance_price_coef": 33, "minLevel": 24},
                        {"insurance_price_coef": 37, "minLevel": 35}
                    ]
                }
            },
            PEACEKEEPER: {
                "base": {
                    "_id": PEACEKEEPER,
                    "nickname": "Peacekeeper",
                    "insurance": {"availability": false, "min_return_hour": 0, "max_return_hour": 0, "max_storage_time": 0},
                    "loyaltyLevels": [{"insurance_price_coef": 0}]
                },
                "assort": {
                    "items": [
                        {"_id": "pk-alpha", "_tpl": SECURE_CONTAINER_ALPHA, "parentId": "hideout", "slotId": "hideout",
                         "upd": {"UnlimitedCount": false, "StackObjectsCount": 1}},
                        {"_id": "pk-beta", "_tpl": SECURE_CONTAINER_BETA, "parentId": "hideout", "slotId": "hideout",
                         "upd": {"UnlimitedCount": false, "StackObjectsCount": 1}},
                        {"_id": "pk-salewa", "_tpl": SALEWA, "parentId": "hideout", "slotId": "hideout"}
                    ],
                    "barter_scheme": {
                        "pk-alpha": [[{"count": 120000, "_tpl": ROUBLES}]],
                        "pk-beta": [[{"count": 1, "_tpl": BITCOIN}]],
                        "pk-salewa": [[{"count": 60, "_tpl": DOLLARS}]]
                    },
                    "loyal_level_items": {"pk-alpha": 3, "pk-beta": 4, "pk-salewa": 1}
                }
            },
            "ragfair": {
                "base": {"_id": "ragfair", "nickname": "Flea"}
            }
        },
        "templates": {
            "items": {
                ITEM_ROOT: {"_id": ITEM_ROOT, "_name": "Item", "_parent": "", "_type": "Node", "_props": {}},
                BASE_CLASS_KEY: {"_id": BASE_CLASS_KEY, "_name": "Key", "_parent": ITEM_ROOT, "_type": "Node", "_props": {}},
                BASE_CLASS_KEY_MECHANICAL: {"_id": BASE_CLASS_KEY_MECHANICAL, "_name": "KeyMechanical",
                    "_parent": BASE_CLASS_KEY, "_type": "Node", "_props": {}},
                BASE_CLASS_KEYCARD: {"_id": BASE_CLASS_KEYCARD, "_name": "Keycard",
                    "_parent": BASE_CLASS_KEY, "_type": "Node", "_props": {}},
                FACTORY_KEY: {"_id": FACTORY_KEY, "_name": "Key_factory", "_parent": BASE_CLASS_KEY_MECHANICAL,
                    "_type": "Item", "_props": {"Weight": 0.01, "MaximumNumberOfUsage": 10, "DiscardLimit": 1, "Width": 1}},
                LAB_KEYCARD: {"_id": LAB_KEYCARD, "_name": "Keycard_lab", "_parent": BASE_CLASS_KEYCARD,
                    "_type": "Item", "_props": {"Weight": 0.02, "MaximumNumberOfUsage": 1}},
                BITCOIN: {"_id": BITCOIN, "_name": "bitcoin", "_parent": ITEM_ROOT,
                    "_type": "Item", "_props": {"Weight": 0.013, "DiscardLimit": 3}},
                SALEWA: {"_id": SALEWA, "_name": "salewa", "_parent": ITEM_ROOT,
                    "_type": "Item", "_props": {"Weight": 0.16}}
            }
        },
        "globals": {
            "config": {"RagFair": {"minUserLevel": 15, "enabled": true}, "exp": {}}
        }
    });

    serde_json::from_value(raw).expect("fixture tables deserialize")
}

pub fn sample_insurance() -> InsuranceConfig {
    serde_json::from_value(json!({
        "returnChancePercent": {PRAPOR: 85, THERAPIST: 95},
        "runIntervalSeconds": 600
    }))
    .expect("fixture insurance deserializes")
}
