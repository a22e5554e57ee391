mod matcher;
mod seed;
