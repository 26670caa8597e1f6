pub mod common;



#[cfg(test)]
mod test_wild;

#[cfg(test)]
mod test_trainer;
