mod detect_test;
