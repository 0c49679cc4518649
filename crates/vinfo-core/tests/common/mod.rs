pub mod info_server;
