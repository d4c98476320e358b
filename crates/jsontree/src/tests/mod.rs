mod parse_good;
mod properties;
