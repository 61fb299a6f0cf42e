use crate::env::parsed_or;

pub const DEFAULT_BCRYPT_COST: u32 = 12;

#[derive(Clone, Debug)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub fn new(bcrypt_cost: u32) -> Self {
        Self {
            bcrypt_cost: bcrypt_cost.clamp(4, 31),
        }
    }

    pub fn from_env() -> Self {
        Self::new(parsed_or("BCRYPT_COST", DEFAULT_BCRYPT_COST))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_is_clamped_to_bcrypt_range() {
        assert_eq!(PasswordConfig::new(1).bcrypt_cost, 4);
        assert_eq!(PasswordConfig::new(10).bcrypt_cost, 10);
        assert_eq!(PasswordConfig::new(40).bcrypt_cost, 31);
    }
}
