mod gemini_tests;
