mod config;
mod info;
mod path;
mod precompute;
mod traverse;
