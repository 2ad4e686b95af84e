use crate::abi::saturating_u64;
use crate::consts::IPFS_GATEWAY;
use crate::state::{BigBoss, CharacterAttributes};

/// Display record shared by characters and the boss. Numbers are narrowed to
/// `u64` and otherwise passed through untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterView {
    /// `None` for the boss.
    pub character_index: Option<u64>,
    pub name: String,
    pub image_uri: String,
    pub hp: u64,
    pub max_hp: u64,
    pub attack_damage: u64,
}

impl CharacterView {
    pub fn image_url(&self) -> String {
        format!("{IPFS_GATEWAY}{}", self.image_uri)
    }
}

impl From<&CharacterAttributes> for CharacterView {
    fn from(raw: &CharacterAttributes) -> Self {
        CharacterView {
            character_index: Some(saturating_u64(raw.characterIndex)),
            name: raw.name.clone(),
            image_uri: raw.imageURI.clone(),
            hp: saturating_u64(raw.hp),
            max_hp: saturating_u64(raw.maxHp),
            attack_damage: saturating_u64(raw.attackDamage),
        }
    }
}

impl From<CharacterAttributes> for CharacterView {
    fn from(raw: CharacterAttributes) -> Self {
        CharacterView::from(&raw)
    }
}

impl From<&BigBoss> for CharacterView {
    fn from(raw: &BigBoss) -> Self {
        CharacterView {
            character_index: None,
            name: raw.name.clone(),
            image_uri: raw.imageURI.clone(),
            hp: saturating_u64(raw.hp),
            max_hp: saturating_u64(raw.maxHp),
            attack_damage: saturating_u64(raw.attackDamage),
        }
    }
}

impl From<BigBoss> for CharacterView {
    fn from(raw: BigBoss) -> Self {
        CharacterView::from(&raw)
    }
}
