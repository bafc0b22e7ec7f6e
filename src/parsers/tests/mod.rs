mod diary_page_tests;
