pub mod bandersnatch;
