mod completion_flow;
mod editing;
mod helpers;
