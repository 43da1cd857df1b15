#[cfg(test)]
mod test;

mod modular;
mod prime;
mod random;
mod uint;

pub use {
    modular::{pow_mod, Modulus},
    prime::{is_prime, random_prime, Trials},
    uint::{DivideByZero, Uint},
};
