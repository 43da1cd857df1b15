mod prime;
