mod crypto_square;
mod unbalanced;
