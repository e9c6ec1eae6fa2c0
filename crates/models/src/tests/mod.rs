mod student_crud_tests;
