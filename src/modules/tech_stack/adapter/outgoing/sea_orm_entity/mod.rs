pub mod tech_stacks;
