pub mod esv;
