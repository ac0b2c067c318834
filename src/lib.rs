pub mod bitmap_font;
pub mod city;
pub mod manifest;
pub mod placeholder_gen;
pub mod text;
