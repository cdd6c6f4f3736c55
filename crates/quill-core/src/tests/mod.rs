mod markup_tests;
