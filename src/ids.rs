//! Well-known database ids

// Hideout areas
pub const STASH_AREA: &str = "5d484fc0654e76006657e0ab";

// Traders
pub const PRAPOR: &str = "54cb50c76803fa8b248b4571";
pub const THERAPIST: &str = "54cb57776803fa99248b456e";
pub const PEACEKEEPER: &str = "5935c25fb3acc3127c3d8cd9";

// Currencies
pub const ROUBLES: &str = "5449016a4bdc2d6f028b456f";
pub const DOLLARS: &str = "5696686a4bdc2da3298b456a";
pub const EUROS: &str = "569668774bdc2da2298b4568";

// Items
pub const BITCOIN: &str = "59faff1d86f7746c51718c9c";
pub const GRAPHICS_CARD: &str = "57347ca924597744596b4e71";
pub const SECURE_CONTAINER_ALPHA: &str = "544a11ac4bdc2d470e8b456a";
pub const SECURE_CONTAINER_BETA: &str = "5857a8b324597729ab0a0e7d";
pub const SECURE_CONTAINER_GAMMA: &str = "5857a8bc2459772bad15db29";

/// Items traded one each for a gamma container
pub const GAMMA_BARTER_ITEMS: [&str; 3] = [
    "655c663a6689c676ce57af85",
    "5b3b713c5acfc4330140bd8d",
    "62963c18dbc8ab5f0d382d0b",
];

/// `_id` of the gamma container entry added to Peacekeeper's assort
pub const GAMMA_ASSORT_ID: &str = "676461e0077d25ad74075130";

// Base classes
pub const BASE_CLASS_KEY: &str = "543be5e94bdc2df1348b4568";
pub const BASE_CLASS_KEY_MECHANICAL: &str = "5c99f98d86f7745c314214b3";
pub const BASE_CLASS_KEYCARD: &str = "5c164d2286f774194c5e69fa";

/// Parent and slot of top-level assort items
pub const ASSORT_ROOT: &str = "hideout";
