pub mod a001_pack;
