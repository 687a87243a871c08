mod literal;
