mod init_tests;
mod scan_tests;
