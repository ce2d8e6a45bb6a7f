mod classification;
mod symmetry;
